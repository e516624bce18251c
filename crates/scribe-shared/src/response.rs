//! Error response body shared by all endpoints.

use serde::{Deserialize, Serialize};

/// A single-field error body: `{"message": "..."}`.
///
/// Lookup failures always carry the literal text `Invalid id`; clients
/// match on it, so it is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn invalid_id() -> Self {
        Self::new("Invalid id")
    }

    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_body_is_stable() {
        let body = serde_json::to_string(&ErrorMessage::invalid_id()).unwrap();
        assert_eq!(body, r#"{"message":"Invalid id"}"#);
    }
}
