//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CatalogConfig, LogFormat, LoggingConfig, ServerConfig, StorageBackend,
    StorageConfig,
};
