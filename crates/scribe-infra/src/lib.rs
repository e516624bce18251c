//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM
//!
//! Without `postgres` the in-memory repositories are the only adapters;
//! they back tests and database-less development runs.

pub mod database;

pub use database::{DatabaseConfig, MemoryPostRepository, MemoryStore, MemoryUserRepository};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository};
