//! # Codeshare Infrastructure
//!
//! Concrete implementations of the ports defined in `codeshare-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL snippet store via SeaORM

pub mod database;
pub mod store;

pub use database::DatabaseConnections;
pub use store::InMemorySnippetRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresSnippetRepository;
