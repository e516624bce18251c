//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{PostRepository, UserRepository};
use scribe_core::service::PostService;
use scribe_infra::database::{
    DatabaseConfig, MemoryPostRepository, MemoryStore, MemoryUserRepository,
};

#[cfg(feature = "postgres")]
use scribe_infra::database::{PostgresPostRepository, PostgresUserRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = {
            if let Some(config) = db_config {
                match connect(config).await {
                    Ok(conn) => Self::from_repos(
                        Arc::new(PostgresUserRepository::new(conn.clone())),
                        Arc::new(PostgresPostRepository::new(conn)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Self::in_memory()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");

        state
    }

    /// Assemble the state from explicit repository implementations.
    pub fn from_repos(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(users, posts),
        }
    }

    fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self::from_repos(
            Arc::new(MemoryUserRepository::new(store.clone())),
            Arc::new(MemoryPostRepository::new(store)),
        )
    }
}
