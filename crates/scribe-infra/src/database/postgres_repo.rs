//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, QuerySelect};

use scribe_core::domain::{NewPost, NewUser, Post, PostWithAuthor, User};
use scribe_core::error::RepoError;
use scribe_core::pagination::PageQuery;
use scribe_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::Entity as UserEntity;

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let active: super::entity::user::ActiveModel = user.into();
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        // Owned posts go with the user via the FK cascade.
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<PostWithAuthor>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        result.map(with_author).transpose()
    }

    async fn list_page(&self, query: &PageQuery) -> Result<Vec<PostWithAuthor>, RepoError> {
        tracing::debug!(page = query.page, size = query.size, "Listing post page");

        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_asc(post::Column::Id)
            .offset(query.offset())
            .limit(query.limit())
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        rows.into_iter().map(with_author).collect()
    }

    async fn add_to_user(&self, post: NewPost) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("foreign key") {
                RepoError::Constraint("post references an unknown user".to_string())
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(model.into())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = entity.into();
        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => RepoError::Query(other.to_string()),
        })?;

        Ok(model.into())
    }
}

/// Pair a fetched post with its author row.
///
/// The FK guarantees the author exists; a missing pair means the rows are
/// inconsistent, which surfaces as a constraint error.
fn with_author(
    (post, author): (post::Model, Option<super::entity::user::Model>),
) -> Result<PostWithAuthor, RepoError> {
    let author = author.ok_or_else(|| {
        RepoError::Constraint(format!("post {} has no author row", post.id))
    })?;

    Ok(PostWithAuthor {
        post: post.into(),
        author: author.into(),
    })
}
