use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - the owner of zero or more posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Positive identifier assigned by the persistence layer.
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation input for a user. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Stamp a new user with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
