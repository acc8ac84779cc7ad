//! Domain layer - Core business logic and entities

pub mod card;
pub mod error;
pub mod reading;
pub mod tarot;
pub mod user;

pub use card::{Card, CardCatalog, CardId, CardValidationError};
pub use error::DomainError;
pub use reading::{Reading, ReadingCard, ReadingId, ReadingRepository};
pub use tarot::RandomSource;
pub use user::{ReadingState, Tier, UserDirectory, UserId, UserValidationError};
