//! Infrastructure services - orchestration over the domain traits

mod reading_service;

pub use reading_service::ReadingService;
