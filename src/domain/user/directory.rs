//! User directory trait
//!
//! The directory is owned by the platform's authentication service; this
//! engine only reads the reading-related slice and writes back
//! `last_reading_at` after each issuance.

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::entity::{ReadingState, UserId};
use crate::domain::DomainError;

/// Read/update access to the per-user reading state
#[async_trait]
pub trait UserDirectory: Send + Sync + Debug {
    /// Fetch the tier and last-reading timestamp for a user, if the user exists
    async fn reading_state(&self, id: &UserId) -> Result<Option<ReadingState>, DomainError>;

    /// Record the timestamp of a freshly issued reading
    async fn set_last_reading_at(
        &self,
        id: &UserId,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError>;
}
