//! PostgreSQL reading repository implementation
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE tarot_readings (
//!     id           UUID PRIMARY KEY,
//!     user_id      TEXT NOT NULL,
//!     card         JSONB NOT NULL,
//!     reading_date TIMESTAMPTZ NOT NULL,
//!     is_premium   BOOLEAN NOT NULL
//! );
//! CREATE INDEX tarot_readings_user_date_idx
//!     ON tarot_readings (user_id, reading_date DESC);
//! ```
//!
//! Note: a unique index on `(user_id, window bucket)` would close the
//! concurrent double-issuance race; the current schema keeps the original
//! platform's behavior and leaves that race open.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::reading::{Reading, ReadingCard, ReadingId, ReadingRepository};
use crate::domain::user::{Tier, UserId};
use crate::domain::DomainError;

/// PostgreSQL implementation of ReadingRepository
#[derive(Debug, Clone)]
pub struct PostgresReadingRepository {
    pool: PgPool,
}

impl PostgresReadingRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadingRepository for PostgresReadingRepository {
    async fn latest_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Option<Reading>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, card, reading_date, is_premium
            FROM tarot_readings
            WHERE user_id = $1 AND reading_date >= $2
            ORDER BY reading_date DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .bind(since)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to query readings: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_reading(&row)?)),
            None => Ok(None),
        }
    }

    async fn latest(&self, user_id: &UserId) -> Result<Option<Reading>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, card, reading_date, is_premium
            FROM tarot_readings
            WHERE user_id = $1
            ORDER BY reading_date DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to query readings: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_reading(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, reading: Reading) -> Result<Reading, DomainError> {
        let card_json = serde_json::to_value(reading.card()).map_err(|e| {
            DomainError::internal(format!("Failed to serialize card snapshot: {}", e))
        })?;

        sqlx::query(
            r#"
            INSERT INTO tarot_readings (id, user_id, card, reading_date, is_premium)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(reading.id().as_uuid())
        .bind(reading.user_id().as_str())
        .bind(card_json)
        .bind(reading.issued_at())
        .bind(reading.tier().is_premium())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!("Reading '{}' already exists", reading.id()))
            } else {
                DomainError::storage(format!("Failed to insert reading: {}", e))
            }
        })?;

        Ok(reading)
    }
}

fn row_to_reading(row: &PgRow) -> Result<Reading, DomainError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Missing reading id: {}", e)))?;

    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::storage(format!("Missing user id: {}", e)))?;

    let card_json: serde_json::Value = row
        .try_get("card")
        .map_err(|e| DomainError::storage(format!("Missing card snapshot: {}", e)))?;

    let issued_at: DateTime<Utc> = row
        .try_get("reading_date")
        .map_err(|e| DomainError::storage(format!("Missing reading date: {}", e)))?;

    let is_premium: bool = row
        .try_get("is_premium")
        .map_err(|e| DomainError::storage(format!("Missing premium flag: {}", e)))?;

    let user_id = UserId::new(user_id)
        .map_err(|e| DomainError::storage(format!("Stored user id is invalid: {}", e)))?;

    let card: ReadingCard = serde_json::from_value(card_json)
        .map_err(|e| DomainError::storage(format!("Stored card snapshot is invalid: {}", e)))?;

    Ok(Reading::from_parts(
        ReadingId::from_uuid(id),
        user_id,
        card,
        issued_at,
        Tier::from_premium_flag(is_premium),
    ))
}
