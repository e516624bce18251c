//! Error handling middleware - maps failures to the wire contract.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use scribe_core::error::{DomainError, RepoError};
use scribe_shared::{ErrorMessage, FieldViolations};

/// Application-level error type behind every handler response.
///
/// Validation failures answer 400 with the violated fields as the body,
/// missing resources answer 404 with the fixed `Invalid id` message, and
/// everything else collapses to an opaque 500.
#[derive(Debug)]
pub enum AppError {
    Validation(FieldViolations),
    NotFound,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(violations) => write!(f, "Validation failed: {}", violations),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(violations) => {
                HttpResponse::build(self.status_code()).json(violations)
            }
            AppError::NotFound => {
                HttpResponse::build(self.status_code()).json(ErrorMessage::invalid_id())
            }
            AppError::Internal(detail) => {
                // Log internal errors; the body stays opaque
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(self.status_code()).json(ErrorMessage::internal())
            }
        }
    }
}

impl From<FieldViolations> for AppError {
    fn from(violations: FieldViolations) -> Self {
        AppError::Validation(violations)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound,
            DomainError::Repo(RepoError::NotFound) => AppError::NotFound,
            DomainError::Repo(repo) => AppError::Internal(repo.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
