use std::sync::Arc;

use crate::domain::{NewPost, PostEdit, PostWithAuthor};
use crate::error::DomainError;
use crate::pagination::PageQuery;
use crate::ports::{PostRepository, UserRepository};

/// Orchestrates post lookup, listing, creation and update against the
/// repository ports. Inputs arrive already validated; this layer only
/// resolves existence and persists.
#[derive(Clone)]
pub struct PostService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    /// The requested window over all posts, in creation order.
    pub async fn list(&self, query: PageQuery) -> Result<Vec<PostWithAuthor>, DomainError> {
        Ok(self.posts.list_page(&query).await?)
    }

    /// A single post with its author.
    pub async fn get(&self, id: i64) -> Result<PostWithAuthor, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Resolve the owning user, then add the post to them.
    pub async fn create(&self, new_post: NewPost) -> Result<PostWithAuthor, DomainError> {
        let author = self
            .users
            .find_by_id(new_post.user_id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(new_post.user_id))?;

        let post = self.posts.add_to_user(new_post).await?;

        Ok(PostWithAuthor { post, author })
    }

    /// Overwrite title and content of an existing post. Id, creation time
    /// and owner survive the update.
    pub async fn update(&self, id: i64, edit: PostEdit) -> Result<PostWithAuthor, DomainError> {
        let PostWithAuthor { mut post, author } = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        post.apply(edit);
        let post = self.posts.save(post).await?;

        Ok(PostWithAuthor { post, author })
    }
}
