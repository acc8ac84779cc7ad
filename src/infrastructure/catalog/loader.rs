//! Card catalog loader
//!
//! The 40-card catalog ships embedded in the binary; deployments can point
//! `catalog.source` at a JSON file to override it. Either way the catalog is
//! parsed and validated once, at startup.

use std::path::Path;

use once_cell::sync::Lazy;

use crate::domain::{CardCatalog, DomainError};

const EMBEDDED_CARDS_JSON: &str = include_str!("cards.json");

static EMBEDDED_CATALOG: Lazy<CardCatalog> = Lazy::new(|| {
    // The embedded file is part of the crate; failing to parse it is a
    // build defect, not a runtime condition.
    CardCatalog::from_json(EMBEDDED_CARDS_JSON)
        .unwrap_or_else(|e| panic!("embedded card catalog is invalid: {}", e))
});

/// The catalog compiled into the binary
pub fn embedded_catalog() -> &'static CardCatalog {
    &EMBEDDED_CATALOG
}

/// Load and validate a catalog from a JSON file on disk
pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<CardCatalog, DomainError> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|e| {
        DomainError::configuration(format!(
            "failed to read catalog file '{}': {}",
            path.display(),
            e
        ))
    })?;

    CardCatalog::from_json(&json)
}

/// Load the configured catalog: a file when `source` is set, the embedded
/// default otherwise.
pub fn load_catalog(source: Option<&str>) -> Result<CardCatalog, DomainError> {
    match source {
        Some(path) => load_catalog_from_path(path),
        None => Ok(embedded_catalog().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardId;

    #[test]
    fn test_embedded_catalog_has_forty_cards() {
        let catalog = embedded_catalog();
        assert_eq!(catalog.len(), 40);
    }

    #[test]
    fn test_embedded_catalog_ids_are_one_to_forty() {
        let catalog = embedded_catalog();

        for id in 1..=40 {
            assert!(
                catalog.contains(CardId::new(id).unwrap()),
                "missing card id {}",
                id
            );
        }
    }

    #[test]
    fn test_embedded_cards_have_premium_content() {
        for card in embedded_catalog().cards() {
            assert!(!card.premium_description().is_empty());
            assert!(!card.practice_text().is_empty());
            assert!(!card.image_url().is_empty());
        }
    }

    #[test]
    fn test_load_catalog_without_source_uses_embedded() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 40);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog(Some("/nonexistent/cards.json"));
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
