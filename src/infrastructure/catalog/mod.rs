//! Catalog loading - embedded default and file-based sources

mod loader;

pub use loader::{embedded_catalog, load_catalog, load_catalog_from_path};
