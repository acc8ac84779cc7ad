//! v1 API endpoints

pub mod tarot;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/tarot/daily/{user_id}", get(tarot::daily_reading))
        .route("/tarot/cards", get(tarot::list_cards))
}
