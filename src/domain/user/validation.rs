//! User id validation

use thiserror::Error;

const MAX_USER_ID_LENGTH: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("user id cannot be empty")]
    Empty,

    #[error("user id cannot exceed {MAX_USER_ID_LENGTH} characters")]
    TooLong,

    #[error("user id may only contain alphanumeric characters and hyphens")]
    InvalidCharacters,

    #[error("user id cannot start or end with a hyphen")]
    InvalidHyphenPosition,
}

/// Validate a user identifier as issued by the user directory
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::Empty);
    }

    if id.len() > MAX_USER_ID_LENGTH {
        return Err(UserValidationError::TooLong);
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(UserValidationError::InvalidCharacters);
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(UserValidationError::InvalidHyphenPosition);
    }

    Ok(())
}
