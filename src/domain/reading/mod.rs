//! Reading domain - issued readings and their storage contract

mod entity;
mod repository;

pub use entity::{Reading, ReadingCard, ReadingId};
pub use repository::ReadingRepository;

#[cfg(test)]
pub use repository::mock::MockReadingRepository;
