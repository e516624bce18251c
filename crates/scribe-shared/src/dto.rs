//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use scribe_core::domain::{Post, PostWithAuthor, User};

/// Request to create a post.
///
/// Fields are optional at the wire level so that an absent field surfaces
/// as a named validation failure instead of a deserializer error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "int_or_string")]
    pub user_id: Option<i64>,
}

/// Request to update a post's title and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Raw `page`/`size` query parameters of the post listing.
///
/// Kept as strings: blank and non-numeric values belong to the validation
/// layer, not the query-string parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsParams {
    pub page: Option<String>,
    pub size: Option<String>,
}

/// Response containing a post and its authorship information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    /// Display name of the owning user.
    pub created_by: String,
}

impl PostResponse {
    /// Project a post and its owning user into the response shape.
    pub fn project(post: &Post, author: &User) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            author_id: author.id,
            created_by: author.name.clone(),
        }
    }

    /// Pointwise page projection, preserving input order.
    pub fn project_page(items: &[PostWithAuthor]) -> Vec<Self> {
        items.iter().map(Self::from).collect()
    }
}

impl From<&PostWithAuthor> for PostResponse {
    fn from(item: &PostWithAuthor) -> Self {
        Self::project(&item.post, &item.author)
    }
}

/// Clients send `userId` either as a JSON number or as a quoted number;
/// both are accepted.
fn int_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
