//! In-memory reading repository

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::reading::{Reading, ReadingRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Thread-safe in-memory reading store.
///
/// Useful for testing and development. Data is lost when the process
/// terminates.
#[derive(Debug, Default)]
pub struct InMemoryReadingRepository {
    readings: RwLock<Vec<Reading>>,
}

impl InMemoryReadingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadingRepository for InMemoryReadingRepository {
    async fn latest_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Option<Reading>, DomainError> {
        let readings = self.readings.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(readings
            .iter()
            .filter(|r| r.user_id() == user_id && r.issued_at() >= since)
            .max_by_key(|r| r.issued_at())
            .cloned())
    }

    async fn latest(&self, user_id: &UserId) -> Result<Option<Reading>, DomainError> {
        let readings = self.readings.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(readings
            .iter()
            .filter(|r| r.user_id() == user_id)
            .max_by_key(|r| r.issued_at())
            .cloned())
    }

    async fn insert(&self, reading: Reading) -> Result<Reading, DomainError> {
        let mut readings = self.readings.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if readings.iter().any(|r| r.id() == reading.id()) {
            return Err(DomainError::conflict(format!(
                "Reading '{}' already exists",
                reading.id()
            )));
        }

        readings.push(reading.clone());
        Ok(reading)
    }
}
