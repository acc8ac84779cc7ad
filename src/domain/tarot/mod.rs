//! Tarot engine core - pure eligibility, selection, and projection logic
//!
//! Everything in this module is side-effect free; orchestration against the
//! reading store and user directory lives in the infrastructure service.

pub mod eligibility;
pub mod projection;
pub mod selector;

pub use selector::RandomSource;
