//! # Scribe Core
//!
//! The domain layer of the Scribe backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod service;

pub use error::DomainError;
