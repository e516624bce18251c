//! Explicit request validation.
//!
//! One function per request type, each returning the validated core input
//! or the set of violated fields. The violation set serializes to a JSON
//! object keyed by field name, which is the 400 response body.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use scribe_core::domain::{NewPost, PostEdit};
use scribe_core::pagination::PageQuery;

use crate::dto::{CreatePostRequest, ListPostsParams, UpdatePostRequest};

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 200;
pub const CONTENT_MIN: usize = 3;
pub const CONTENT_MAX: usize = 10_000;

/// Violated fields keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("invalid request fields: {fields:?}")]
pub struct FieldViolations {
    fields: BTreeMap<&'static str, String>,
}

impl FieldViolations {
    /// Record a violation. The first message per field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

/// Check a create request. Title and content are bounded in characters,
/// `userId` must be a positive integer; the referenced user's existence is
/// the service's concern, not this layer's.
pub fn create_post(request: &CreatePostRequest) -> Result<NewPost, FieldViolations> {
    let mut violations = FieldViolations::default();

    let title = text_in_bounds(
        "title",
        request.title.as_deref(),
        TITLE_MIN,
        TITLE_MAX,
        &mut violations,
    );
    let content = text_in_bounds(
        "content",
        request.content.as_deref(),
        CONTENT_MIN,
        CONTENT_MAX,
        &mut violations,
    );
    let user_id = positive_id("userId", request.user_id, &mut violations);

    match (title, content, user_id) {
        (Some(title), Some(content), Some(user_id)) => Ok(NewPost::new(user_id, title, content)),
        _ => Err(violations),
    }
}

/// Check an update request together with the path id it targets.
pub fn update_post(post_id: i64, request: &UpdatePostRequest) -> Result<PostEdit, FieldViolations> {
    let mut violations = FieldViolations::default();

    let title = text_in_bounds(
        "title",
        request.title.as_deref(),
        TITLE_MIN,
        TITLE_MAX,
        &mut violations,
    );
    let content = text_in_bounds(
        "content",
        request.content.as_deref(),
        CONTENT_MIN,
        CONTENT_MAX,
        &mut violations,
    );
    if post_id <= 0 {
        violations.add("postId", "postId must be a positive integer");
    }

    match (title, content) {
        (Some(title), Some(content)) if violations.is_empty() => Ok(PostEdit { title, content }),
        _ => Err(violations),
    }
}

/// Check the listing parameters. `page` must be an integer >= 0 and `size`
/// an integer > 0; absent and blank values fail, they are never defaulted.
///
/// The two parameters validate as a unit: when either fails, both are
/// reported as failing fields.
pub fn page_query(params: &ListPostsParams) -> Result<PageQuery, FieldViolations> {
    let page = int_param(params.page.as_deref()).filter(|page| *page >= 0);
    let size = int_param(params.size.as_deref()).filter(|size| *size > 0);

    match (page, size) {
        (Some(page), Some(size)) => Ok(PageQuery::new(page as u64, size as u64)),
        _ => {
            let mut violations = FieldViolations::default();
            violations.add("page", "page must be an integer greater than or equal to 0");
            violations.add("size", "size must be a positive integer");
            Err(violations)
        }
    }
}

/// Length check counted in characters, not bytes. Records a violation and
/// returns `None` when the value is absent or out of bounds.
fn text_in_bounds(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
    violations: &mut FieldViolations,
) -> Option<String> {
    let Some(text) = value else {
        violations.add(field, format!("{field} is required"));
        return None;
    };

    let length = text.chars().count();
    if length < min || length > max {
        violations.add(field, format!("length must be between {min} and {max}"));
        return None;
    }

    Some(text.to_owned())
}

fn positive_id(
    field: &'static str,
    value: Option<i64>,
    violations: &mut FieldViolations,
) -> Option<i64> {
    match value {
        None => {
            violations.add(field, format!("{field} is required"));
            None
        }
        Some(id) if id <= 0 => {
            violations.add(field, format!("{field} must be a positive integer"));
            None
        }
        Some(id) => Some(id),
    }
}

fn int_param(value: Option<&str>) -> Option<i64> {
    value?.trim().parse().ok()
}
