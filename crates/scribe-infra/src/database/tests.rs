#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use scribe_core::domain::{NewPost, Post};
    use scribe_core::error::RepoError;
    use scribe_core::ports::{PostRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_find_user_by_id() {
        let now = chrono::Utc::now();

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: 3,
                name: "epicblues".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let result = repo.find_by_id(3).await.unwrap();

        assert!(result.is_some());
        let user = result.unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "epicblues");
    }

    #[tokio::test]
    async fn test_insert_post_maps_returned_row() {
        let now = chrono::Utc::now();

        // Postgres inserts go through RETURNING, so the assigned row comes
        // back as a query result.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: 15,
                user_id: 3,
                title: "Test Post".to_owned(),
                content: "Content".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo
            .add_to_user(NewPost::new(3, "Test Post", "Content"))
            .await
            .unwrap();

        assert_eq!(post.id, 15);
        assert_eq!(post.user_id, 3);
        assert_eq!(post.title, "Test Post");
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let now = chrono::Utc::now();

        // UPDATE .. RETURNING with no matching row yields no results.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo
            .save(Post {
                id: 999,
                user_id: 3,
                title: "updated!".to_owned(),
                content: "updatedContent!".to_owned(),
                created_at: now,
                updated_at: now,
            })
            .await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        assert!(matches!(repo.delete(999).await, Err(RepoError::NotFound)));
    }
}
