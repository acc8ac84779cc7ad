//! Reading store implementations

mod in_memory;
mod postgres_repository;

pub use in_memory::InMemoryReadingRepository;
pub use postgres_repository::PostgresReadingRepository;
