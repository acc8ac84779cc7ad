//! PostgreSQL user directory implementation
//!
//! Reads the reading-related slice of the platform's `users` table:
//!
//! ```sql
//! -- owned by the authentication service; this engine touches only
//! -- is_premium (read) and last_tarot_reading (read/write)
//! CREATE TABLE users (
//!     id                 TEXT PRIMARY KEY,
//!     is_premium         BOOLEAN NOT NULL DEFAULT FALSE,
//!     last_tarot_reading TIMESTAMPTZ
//!     -- ... credentials, profile, subscription columns elided
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::user::{ReadingState, Tier, UserDirectory, UserId};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserDirectory
#[derive(Debug, Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    /// Create a new directory with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn reading_state(&self, id: &UserId) -> Result<Option<ReadingState>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT is_premium, last_tarot_reading
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user state: {}", e)))?;

        match row {
            Some(row) => {
                let is_premium: bool = row.try_get("is_premium").map_err(|e| {
                    DomainError::storage(format!("Missing premium flag: {}", e))
                })?;

                let last_reading_at: Option<DateTime<Utc>> =
                    row.try_get("last_tarot_reading").map_err(|e| {
                        DomainError::storage(format!("Missing last reading column: {}", e))
                    })?;

                Ok(Some(ReadingState::new(
                    Tier::from_premium_flag(is_premium),
                    last_reading_at,
                )))
            }
            None => Ok(None),
        }
    }

    async fn set_last_reading_at(
        &self,
        id: &UserId,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET last_tarot_reading = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::storage(format!("Failed to update last reading timestamp: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        Ok(())
    }
}
