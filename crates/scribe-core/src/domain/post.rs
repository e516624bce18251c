use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Post entity - a titled content item owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Positive identifier assigned by the persistence layer.
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    /// Immutable after creation.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Overwrite title and content in place. Id, owner and creation time
    /// stay untouched; `updated_at` is bumped.
    pub fn apply(&mut self, edit: PostEdit) {
        self.title = edit.title;
        self.content = edit.content;
        self.updated_at = Utc::now();
    }
}

/// Validated creation input for a post. The store assigns the id; the
/// creation time is stamped here, when the input is formed.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    pub fn new(user_id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Validated update input for a post.
#[derive(Debug, Clone)]
pub struct PostEdit {
    pub title: String,
    pub content: String,
}

/// A post joined with its owning user - the input of the response
/// projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: User,
}
