use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, PostWithAuthor, User};
use crate::error::RepoError;
use crate::pagination::PageQuery;

/// User repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError>;

    /// Persist a new user; the store assigns the id.
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError>;

    /// Delete a user and, with them, every post they own.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}

/// Post repository. Reads return the post joined with its owning user.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post and its author by the post id.
    async fn find_by_id(&self, id: i64) -> Result<Option<PostWithAuthor>, RepoError>;

    /// The requested window over all posts, ordered by ascending id
    /// (creation order). Windows past the end come back short or empty.
    async fn list_page(&self, query: &PageQuery) -> Result<Vec<PostWithAuthor>, RepoError>;

    /// Insert a post owned by `new_post.user_id` in one atomic operation.
    /// The owning user must exist; the store enforces the relationship.
    async fn add_to_user(&self, new_post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite an existing post row. `RepoError::NotFound` when the row
    /// is gone.
    async fn save(&self, post: Post) -> Result<Post, RepoError>;
}
