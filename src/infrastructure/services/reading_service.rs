//! Reading service - the engine's single logical operation
//!
//! `get_or_create_reading` evaluates the eligibility window, returns the
//! current reading when one exists, and otherwise selects, projects, and
//! persists a new one, then advances the user's `last_reading_at`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::card::{CardCatalog, CardId};
use crate::domain::reading::{Reading, ReadingRepository};
use crate::domain::tarot::{eligibility, projection, selector, RandomSource};
use crate::domain::user::{UserDirectory, UserId};
use crate::domain::DomainError;

/// Orchestrates eligibility, selection, projection, and persistence.
///
/// Holds no state across requests beyond its collaborators; two concurrent
/// requests for the same user can both observe an empty window and issue
/// twice. That race is a documented limitation of the store contract, not
/// something this service prevents.
#[derive(Debug)]
pub struct ReadingService {
    catalog: Arc<CardCatalog>,
    readings: Arc<dyn ReadingRepository>,
    users: Arc<dyn UserDirectory>,
    rng: Arc<dyn RandomSource>,
}

impl ReadingService {
    pub fn new(
        catalog: Arc<CardCatalog>,
        readings: Arc<dyn ReadingRepository>,
        users: Arc<dyn UserDirectory>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            catalog,
            readings,
            users,
            rng,
        }
    }

    /// Return the user's current reading, or issue a new one.
    ///
    /// Within the tier's eligibility window the persisted reading comes back
    /// unchanged, for both tiers. Outside it, a new card is drawn (never the
    /// immediately preceding one), projected for the tier, and persisted.
    pub async fn get_or_create_reading(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Reading, DomainError> {
        let state = self
            .users
            .reading_state(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))?;

        let window_start = eligibility::window_start(state.tier, now);

        if let Some(existing) = self.readings.latest_since(user_id, window_start).await? {
            debug!(
                user_id = %user_id,
                reading_id = %existing.id(),
                "Returning reading still within the eligibility window"
            );
            return Ok(existing);
        }

        let exclude = self.previous_card_id(user_id, state.last_reading_at).await?;
        let card = selector::select_card(&self.catalog, exclude, self.rng.as_ref());
        let payload = projection::project_card(card, state.tier);

        let reading = self
            .readings
            .insert(Reading::new(user_id.clone(), payload, now, state.tier))
            .await?;

        // The insert is the issuance; a failed state update is tolerated and
        // only weakens the next anti-repetition exclusion.
        if let Err(e) = self.users.set_last_reading_at(user_id, now).await {
            warn!(
                user_id = %user_id,
                error = %e,
                "Failed to update last reading timestamp after issuance"
            );
        }

        info!(
            user_id = %user_id,
            reading_id = %reading.id(),
            card_id = %reading.card().card_id(),
            tier = ?reading.tier(),
            "Issued new reading"
        );

        Ok(reading)
    }

    /// Card id of the most recent prior reading, used as the anti-repetition
    /// exclusion. A user with no recorded `last_reading_at` has no prior
    /// reading to exclude, so the lookup is skipped.
    async fn previous_card_id(
        &self,
        user_id: &UserId,
        last_reading_at: Option<DateTime<Utc>>,
    ) -> Result<Option<CardId>, DomainError> {
        if last_reading_at.is_none() {
            return Ok(None);
        }

        Ok(self
            .readings
            .latest(user_id)
            .await?
            .map(|r| r.card().card_id()))
    }
}
