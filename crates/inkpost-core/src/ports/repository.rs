use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, Permission, Post, PostStatus, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// Deletion is soft: `trash` sets the tombstone and `restore` clears it.
/// `find_by_id` also returns trashed rows so they can be restored.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity. Last write wins.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Soft-delete an entity by its ID.
    async fn trash(&self, id: ID) -> Result<(), RepoError>;

    /// Clear the tombstone of a soft-deleted entity.
    async fn restore(&self, id: ID) -> Result<(), RepoError>;
}

/// Page selection for list views. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub const MAX_PER_PAGE: u64 = 100;

    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }

    /// Rows to skip. Saturates at `i64::MAX`, the largest OFFSET Postgres takes.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Table filters of the post list view. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFilter {
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub status: Option<PostStatus>,
}

impl PostFilter {
    /// Whether a post passes every active filter. Trashed posts never do.
    pub fn matches(&self, post: &Post) -> bool {
        post.deleted_at.is_none()
            && self.author_id.is_none_or(|id| post.author_id == id)
            && self.category_id.is_none_or(|id| post.category_id == id)
            && self.status.is_none_or(|status| post.status == status)
    }
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// List live posts matching `filter`, newest first.
    async fn list(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> Result<Paginated<Post>, RepoError>;

    /// Count live posts in the given status.
    async fn count_by_status(&self, status: PostStatus) -> Result<u64, RepoError>;

    /// Soft-delete many posts; returns how many were affected.
    async fn trash_many(&self, ids: &[Uuid]) -> Result<u64, RepoError>;

    /// Toggle column of the table view.
    async fn set_bring_to_light(&self, id: Uuid, value: bool) -> Result<(), RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    /// All live categories ordered by name.
    async fn list(&self) -> Result<Vec<Category>, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Permission catalog repository.
#[async_trait]
pub trait PermissionRepository: BaseRepository<Permission, Uuid> {
    /// All live permissions ordered by name.
    async fn list(&self) -> Result<Vec<Permission>, RepoError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Permission>, RepoError>;
}
