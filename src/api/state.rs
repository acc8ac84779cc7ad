//! Application state for shared services

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::card::CardCatalog;
use crate::domain::reading::Reading;
use crate::domain::user::{UserDirectory, UserId};
use crate::domain::DomainError;
use crate::infrastructure::services::ReadingService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub reading_service: Arc<dyn ReadingServiceTrait>,
    pub user_directory: Arc<dyn UserDirectory>,
    pub catalog: Arc<CardCatalog>,
}

/// Trait for the reading engine's single logical operation
#[async_trait::async_trait]
pub trait ReadingServiceTrait: Send + Sync {
    async fn get_or_create_reading(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Reading, DomainError>;
}

#[async_trait::async_trait]
impl ReadingServiceTrait for ReadingService {
    async fn get_or_create_reading(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Reading, DomainError> {
        ReadingService::get_or_create_reading(self, user_id, now).await
    }
}
