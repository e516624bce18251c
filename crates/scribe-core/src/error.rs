//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl DomainError {
    pub fn post_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "post",
            id,
        }
    }

    pub fn user_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "user",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
