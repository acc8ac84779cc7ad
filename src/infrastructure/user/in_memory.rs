//! In-memory user directory

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::user::{ReadingState, Tier, UserDirectory, UserId};
use crate::domain::DomainError;

/// Thread-safe in-memory user directory.
///
/// Useful for testing and development; deployments back this with the
/// platform's user database.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, ReadingState>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with the given tier and no reading history
    pub fn add_user(&self, id: &UserId, tier: Tier) -> Result<(), DomainError> {
        let mut users = self.users.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        users.insert(id.as_str().to_string(), ReadingState::new(tier, None));
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn reading_state(&self, id: &UserId) -> Result<Option<ReadingState>, DomainError> {
        let users = self.users.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(users.get(id.as_str()).copied())
    }

    async fn set_last_reading_at(
        &self,
        id: &UserId,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let mut users = self.users.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match users.get_mut(id.as_str()) {
            Some(state) => {
                state.last_reading_at = Some(at);
                Ok(())
            }
            None => Err(DomainError::not_found(format!("User '{}' not found", id))),
        }
    }
}
