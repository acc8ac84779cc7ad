//! Card catalog - the fixed, ordered set of tarot cards
//!
//! Loaded once at startup and validated there; a malformed catalog is a
//! startup failure, never a per-request condition.

use std::collections::HashSet;

use super::entity::{Card, CardId};
use crate::domain::DomainError;

/// The full ordered card catalog.
///
/// Guaranteed non-empty with unique ids once constructed.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<Card>,
}

impl CardCatalog {
    /// Build a catalog, validating every entry.
    ///
    /// Fails when the catalog is empty, an id repeats, or an entry has
    /// empty content fields.
    pub fn new(cards: Vec<Card>) -> Result<Self, DomainError> {
        if cards.is_empty() {
            return Err(DomainError::catalog("catalog must contain at least one card"));
        }

        let mut seen = HashSet::new();

        for card in &cards {
            if !seen.insert(card.id()) {
                return Err(DomainError::catalog(format!(
                    "duplicate card id {} in catalog",
                    card.id()
                )));
            }

            card.validate()
                .map_err(|e| DomainError::catalog(e.to_string()))?;
        }

        Ok(Self { cards })
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let cards: Vec<Card> = serde_json::from_str(json)
            .map_err(|e| DomainError::catalog(format!("invalid catalog JSON: {}", e)))?;

        Self::new(cards)
    }

    /// Number of cards in the catalog
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        // The constructor rejects empty catalogs, so this is always false
        self.cards.is_empty()
    }

    /// All cards in catalog order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Check whether an id belongs to the catalog
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }
}
