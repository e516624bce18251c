//! In-memory repositories - used as fallback when no database is configured.
//!
//! Note: Data is lost on process restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use scribe_core::domain::{NewPost, NewUser, Post, PostWithAuthor, User};
use scribe_core::error::RepoError;
use scribe_core::pagination::PageQuery;
use scribe_core::ports::{PostRepository, UserRepository};

#[derive(Debug, Default)]
struct StoreInner {
    users: BTreeMap<i64, User>,
    posts: BTreeMap<i64, Post>,
    // Last assigned ids; assignment starts at 1.
    user_seq: i64,
    post_seq: i64,
}

/// Shared in-memory store backing both repositories.
///
/// Cloning shares the underlying maps, so a user repository and a post
/// repository built from the same store see each other's writes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// In-memory user repository.
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

/// In-memory post repository.
pub struct MemoryPostRepository {
    store: MemoryStore,
}

impl MemoryPostRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        let inner = self.store.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let mut inner = self.store.inner.write().await;

        inner.user_seq += 1;
        let id = inner.user_seq;
        let user = User {
            id,
            name: user.name,
            created_at: user.created_at,
            updated_at: user.created_at,
        };
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut inner = self.store.inner.write().await;

        if inner.users.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        // Owned posts go with the user, matching the FK cascade.
        inner.posts.retain(|_, post| post.user_id != id);

        Ok(())
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<PostWithAuthor>, RepoError> {
        let inner = self.store.inner.read().await;

        match inner.posts.get(&id) {
            None => Ok(None),
            Some(post) => with_author(&inner, post).map(Some),
        }
    }

    async fn list_page(&self, query: &PageQuery) -> Result<Vec<PostWithAuthor>, RepoError> {
        let inner = self.store.inner.read().await;

        // BTreeMap iteration is already id-ascending.
        let ordered: Vec<&Post> = inner.posts.values().collect();
        ordered[query.clamp(ordered.len())]
            .iter()
            .map(|post| with_author(&inner, post))
            .collect()
    }

    async fn add_to_user(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut inner = self.store.inner.write().await;

        if !inner.users.contains_key(&post.user_id) {
            return Err(RepoError::Constraint(
                "post references an unknown user".to_string(),
            ));
        }

        inner.post_seq += 1;
        let id = inner.post_seq;
        let post = Post {
            id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.created_at,
        };
        inner.posts.insert(id, post.clone());

        Ok(post)
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut inner = self.store.inner.write().await;

        if !inner.posts.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        inner.posts.insert(entity.id, entity.clone());

        Ok(entity)
    }
}

fn with_author(inner: &StoreInner, post: &Post) -> Result<PostWithAuthor, RepoError> {
    let author = inner
        .users
        .get(&post.user_id)
        .ok_or_else(|| RepoError::Constraint(format!("post {} has no author row", post.id)))?;

    Ok(PostWithAuthor {
        post: post.clone(),
        author: author.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repos() -> (MemoryUserRepository, MemoryPostRepository) {
        let store = MemoryStore::new();
        (
            MemoryUserRepository::new(store.clone()),
            MemoryPostRepository::new(store),
        )
    }

    #[tokio::test]
    async fn test_ids_are_assigned_from_one() {
        let (users, posts) = repos();

        let user = users.create(NewUser::new("epicblues")).await.unwrap();
        assert_eq!(user.id, 1);

        let first = posts
            .add_to_user(NewPost::new(user.id, "title", "content"))
            .await
            .unwrap();
        let second = posts
            .add_to_user(NewPost::new(user.id, "title", "content"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_add_to_unknown_user_is_rejected() {
        let (_, posts) = repos();

        let result = posts
            .add_to_user(NewPost::new(42, "title", "content"))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_deleting_a_user_removes_their_posts() {
        let (users, posts) = repos();

        let owner = users.create(NewUser::new("owner")).await.unwrap();
        let other = users.create(NewUser::new("other")).await.unwrap();
        posts
            .add_to_user(NewPost::new(owner.id, "mine", "content"))
            .await
            .unwrap();
        let kept = posts
            .add_to_user(NewPost::new(other.id, "theirs", "content"))
            .await
            .unwrap();

        users.delete(owner.id).await.unwrap();

        let page = posts.list_page(&PageQuery::new(0, 10)).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|item| item.post.id).collect();
        assert_eq!(ids, vec![kept.id]);
    }

    #[tokio::test]
    async fn test_pages_are_ordered_windows() {
        let (users, posts) = repos();

        let author = users.create(NewUser::new("author")).await.unwrap();
        for n in 0..100 {
            posts
                .add_to_user(NewPost::new(
                    author.id,
                    format!("title{n}"),
                    format!("content{n}"),
                ))
                .await
                .unwrap();
        }

        let page = posts.list_page(&PageQuery::new(2, 10)).await.unwrap();

        let ids: Vec<i64> = page.iter().map(|item| item.post.id).collect();
        assert_eq!(ids, (21..=30).collect::<Vec<i64>>());
        assert_eq!(page[0].post.title, "title20");
        assert_eq!(page[0].author.name, "author");
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let (users, posts) = repos();

        let author = users.create(NewUser::new("author")).await.unwrap();
        posts
            .add_to_user(NewPost::new(author.id, "only", "content"))
            .await
            .unwrap();

        let page = posts.list_page(&PageQuery::new(7, 50)).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_save_requires_an_existing_post() {
        let (users, posts) = repos();

        let author = users.create(NewUser::new("author")).await.unwrap();
        let mut post = posts
            .add_to_user(NewPost::new(author.id, "before", "content"))
            .await
            .unwrap();

        post.title = "after".to_string();
        let updated = posts.save(post.clone()).await.unwrap();
        assert_eq!(updated.title, "after");

        post.id = 999;
        assert!(matches!(posts.save(post).await, Err(RepoError::NotFound)));
    }
}
