//! Card domain - static tarot catalog entries and the validated catalog

mod catalog;
mod entity;

pub use catalog::CardCatalog;
pub use entity::{Card, CardId, CardValidationError};
