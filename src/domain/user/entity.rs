//! User-facing types the engine needs from the user directory
//!
//! The full user record (credentials, subscription, profile) lives with the
//! authentication service; only the membership tier and the timestamp of the
//! most recent reading matter here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};

/// User identifier - non-empty, alphanumeric plus hyphens
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Membership tier, gating content depth and issuance frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Free,
    Premium,
}

impl Tier {
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Premium)
    }

    /// Map the legacy boolean flag from the platform's user records
    pub fn from_premium_flag(premium: bool) -> Self {
        if premium {
            Self::Premium
        } else {
            Self::Free
        }
    }
}

/// The slice of the user record this engine reads and updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingState {
    pub tier: Tier,
    /// Timestamp of the most recent reading ever issued, if any
    pub last_reading_at: Option<DateTime<Utc>>,
}

impl ReadingState {
    pub fn new(tier: Tier, last_reading_at: Option<DateTime<Utc>>) -> Self {
        Self {
            tier,
            last_reading_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new("user-123").unwrap();
        assert_eq!(id.as_str(), "user-123");
        assert_eq!(id.to_string(), "user-123");
    }

    #[test]
    fn test_user_id_invalid() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("-leading").is_err());
        assert!(UserId::new("trailing-").is_err());
        assert!(UserId::new("has space").is_err());
    }

    #[test]
    fn test_tier_premium_flag() {
        assert_eq!(Tier::from_premium_flag(true), Tier::Premium);
        assert_eq!(Tier::from_premium_flag(false), Tier::Free);
        assert!(Tier::Premium.is_premium());
        assert!(!Tier::Free.is_premium());
    }

    #[test]
    fn test_tier_serde() {
        assert_eq!(serde_json::to_string(&Tier::Premium).unwrap(), "\"premium\"");
        assert_eq!(serde_json::to_string(&Tier::Free).unwrap(), "\"free\"");
    }

    #[test]
    fn test_reading_state() {
        let state = ReadingState::new(Tier::Free, None);
        assert_eq!(state.tier, Tier::Free);
        assert!(state.last_reading_at.is_none());
    }
}
