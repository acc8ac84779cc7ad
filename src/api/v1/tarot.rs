//! Tarot endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CardSummary, CardsResponse, ReadingResponse};
use crate::domain::user::UserId;

/// GET /v1/tarot/daily/{user_id}
///
/// Returns the user's current reading, issuing a new one when the
/// eligibility window has passed. Authentication happens upstream; the
/// gateway forwards the authenticated user id in the path.
pub async fn daily_reading(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ReadingResponse>, ApiError> {
    debug!(user_id = %user_id, "Daily tarot reading requested");

    let user_id = UserId::new(user_id)
        .map_err(|e| ApiError::bad_request(e.to_string()).with_param("user_id"))?;

    let reading = state
        .reading_service
        .get_or_create_reading(&user_id, Utc::now())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ReadingResponse::from_domain(&reading)))
}

/// GET /v1/tarot/cards
///
/// Full catalog listing with free-tier content only; the card-fan display
/// on the frontend consumes this.
pub async fn list_cards(State(state): State<AppState>) -> Json<CardsResponse> {
    let cards: Vec<CardSummary> = state
        .catalog
        .cards()
        .iter()
        .map(CardSummary::from_domain)
        .collect();

    Json(CardsResponse::new(cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_user_id_is_rejected_upfront() {
        // The handler validates before touching the service; mirror that
        // check here at the type level.
        assert!(UserId::new("not a valid id!").is_err());
        assert!(UserId::new("valid-id-42").is_ok());
    }
}
