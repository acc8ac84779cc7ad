//! User domain
//!
//! Types and traits for the slice of the user record the reading engine
//! consumes: identifier, membership tier, and last-reading timestamp.

mod directory;
mod entity;
mod validation;

pub use directory::UserDirectory;
pub use entity::{ReadingState, Tier, UserId};
pub use validation::{validate_user_id, UserValidationError};

#[cfg(test)]
pub use directory::mock::MockUserDirectory;
