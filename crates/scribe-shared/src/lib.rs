//! # Scribe Shared
//!
//! Request/response types of the HTTP surface and their validation.
//! Everything here is serde-facing; domain types live in `scribe-core`.

pub mod dto;
pub mod response;
pub mod validate;

pub use response::ErrorMessage;
pub use validate::FieldViolations;
