//! Infrastructure layer - External service implementations

pub mod catalog;
pub mod logging;
pub mod random;
pub mod reading;
pub mod services;
pub mod user;
