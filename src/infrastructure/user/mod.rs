//! User directory implementations

mod in_memory;
mod postgres_directory;

pub use in_memory::InMemoryUserDirectory;
pub use postgres_directory::PostgresUserDirectory;
