//! Calma Tarot Engine
//!
//! Reading eligibility and card selection for the Calma wellness platform:
//! - Time-windowed entitlement (premium: calendar day UTC, free: rolling 72 h)
//! - Anti-repetition card selection over the 40-card catalog
//! - Tier-based content projection
//! - Append-only reading persistence with user-state update

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use config::StorageBackend;
use domain::reading::ReadingRepository;
use domain::user::UserDirectory;
use infrastructure::catalog::load_catalog;
use infrastructure::random::ThreadRngSource;
use infrastructure::reading::{InMemoryReadingRepository, PostgresReadingRepository};
use infrastructure::services::ReadingService;
use infrastructure::user::{InMemoryUserDirectory, PostgresUserDirectory};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    // Catalog problems are fatal here, never per-request.
    let catalog = Arc::new(
        load_catalog(config.catalog.source.as_deref())
            .map_err(|e| anyhow::anyhow!("failed to load card catalog: {}", e))?,
    );
    info!(cards = catalog.len(), "Card catalog loaded");

    let (readings, users): (Arc<dyn ReadingRepository>, Arc<dyn UserDirectory>) =
        match config.storage.backend {
            StorageBackend::Postgres => {
                let database_url = std::env::var("DATABASE_URL").map_err(|_| {
                    anyhow::anyhow!("DATABASE_URL environment variable is required")
                })?;

                info!("Connecting to PostgreSQL...");
                let pool = sqlx::PgPool::connect(&database_url)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
                info!("PostgreSQL connection established");

                (
                    Arc::new(PostgresReadingRepository::new(pool.clone())),
                    Arc::new(PostgresUserDirectory::new(pool)),
                )
            }
            StorageBackend::Memory => {
                info!("Using in-memory storage");
                (
                    Arc::new(InMemoryReadingRepository::new()),
                    Arc::new(InMemoryUserDirectory::new()),
                )
            }
        };

    let reading_service = Arc::new(ReadingService::new(
        catalog.clone(),
        readings,
        users.clone(),
        Arc::new(ThreadRngSource::new()),
    ));

    Ok(AppState {
        reading_service,
        user_directory: users,
        catalog,
    })
}
