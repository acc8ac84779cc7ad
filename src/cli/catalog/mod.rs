//! Check-catalog command - validate a catalog file without starting the server

use anyhow::Context;
use clap::Args;

use crate::infrastructure::catalog;

#[derive(Args)]
pub struct CheckCatalogArgs {
    /// Path to the catalog JSON file; checks the embedded catalog when omitted
    #[arg(long)]
    pub path: Option<String>,
}

/// Validate the catalog and print a short summary
pub fn run(args: CheckCatalogArgs) -> anyhow::Result<()> {
    let catalog = catalog::load_catalog(args.path.as_deref())
        .context("catalog validation failed")?;

    let source = args.path.as_deref().unwrap_or("<embedded>");
    println!("{}: {} cards, ids ok", source, catalog.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_passes() {
        let args = CheckCatalogArgs { path: None };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_missing_file_fails() {
        let args = CheckCatalogArgs {
            path: Some("/nonexistent/cards.json".to_string()),
        };
        assert!(run(args).is_err());
    }
}
