//! Application state - shared across all handlers.

use std::sync::Arc;

use inkpost_core::policy::Gate;
use inkpost_core::ports::{
    CategoryRepository, FileStorage, PasswordService, PermissionChecker, PermissionRepository,
    PostRepository, TokenService, UserRepository,
};
use inkpost_core::resource::{PostResource, SlugMode};
use inkpost_core::widget::BlogPostOverview;
use inkpost_infra::auth::{Argon2PasswordService, JwtTokenService};
use inkpost_infra::{
    InMemoryCategoryRepository, InMemoryPermissionChecker, InMemoryPermissionRepository,
    InMemoryPostRepository, InMemoryUserRepository, PublicDiskStorage,
};

use crate::config::AppConfig;

/// Repository handles plus the permission checker over the same store.
#[derive(Clone)]
pub struct Repositories {
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub users: Arc<dyn UserRepository>,
    pub permissions: Arc<dyn PermissionRepository>,
    pub checker: Arc<dyn PermissionChecker>,
    pub backend: &'static str,
}

impl Repositories {
    /// Process-local store. The returned checker handle is used to grant
    /// permissions, which the HTTP API does not expose.
    pub fn in_memory() -> (Self, Arc<InMemoryPermissionChecker>) {
        let permissions = Arc::new(InMemoryPermissionRepository::new());
        let checker = Arc::new(InMemoryPermissionChecker::new(permissions.clone()));

        let repos = Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            categories: Arc::new(InMemoryCategoryRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            permissions,
            checker: checker.clone(),
            backend: "memory",
        };
        (repos, checker)
    }

    #[cfg(feature = "postgres")]
    pub fn postgres(db: inkpost_infra::database::DbConn) -> Self {
        use inkpost_infra::{
            PostgresCategoryRepository, PostgresPermissionChecker, PostgresPermissionRepository,
            PostgresPostRepository, PostgresUserRepository,
        };

        Self {
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            permissions: Arc::new(PostgresPermissionRepository::new(db.clone())),
            checker: Arc::new(PostgresPermissionChecker::new(db)),
            backend: "postgres",
        }
    }

    /// Postgres when configured and reachable, in-memory otherwise.
    pub async fn connect(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match inkpost_infra::connect(db_config).await {
                    Ok(db) => return Self::postgres(db),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
        }

        Self::in_memory().0
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    pub posts: PostResource,
    pub overview: BlogPostOverview,
    pub gate: Gate,
    pub storage: Arc<dyn FileStorage>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub slug_mode: SlugMode,
}

impl AppState {
    pub fn new(
        repos: Repositories,
        storage: Arc<dyn FileStorage>,
        tokens: Arc<dyn TokenService>,
        slug_mode: SlugMode,
    ) -> Self {
        Self {
            posts: PostResource::new(
                repos.posts.clone(),
                repos.categories.clone(),
                repos.users.clone(),
            ),
            overview: BlogPostOverview::new(repos.posts.clone()),
            gate: Gate::new(repos.checker.clone()),
            storage,
            tokens,
            passwords: Arc::new(Argon2PasswordService::new()),
            slug_mode,
            repos,
        }
    }

    /// Build the application state from configuration.
    pub async fn from_config(config: &AppConfig) -> Self {
        let repos = Repositories::connect(config).await;
        let storage = Arc::new(PublicDiskStorage::new(
            config.storage.root.clone(),
            config.storage.public_url.clone(),
        ));
        let tokens = Arc::new(JwtTokenService::new(config.jwt.clone()));

        tracing::info!(
            backend = repos.backend,
            storage_root = %config.storage.root.display(),
            slug_mode = ?config.slug_mode,
            "Application state initialized"
        );

        Self::new(repos, storage, tokens, config.slug_mode)
    }
}
