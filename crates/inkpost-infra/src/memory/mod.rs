//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Data is lost on process restart.

mod permission;
mod table;

use async_trait::async_trait;
use uuid::Uuid;

use inkpost_core::domain::{Category, Permission, Post, PostStatus, User};
use inkpost_core::error::RepoError;
use inkpost_core::ports::{
    CategoryRepository, PageRequest, Paginated, PermissionRepository, PostFilter, PostRepository,
    UserRepository,
};

pub use permission::InMemoryPermissionChecker;
pub use table::{InMemoryTable, Record};

pub type InMemoryPostRepository = InMemoryTable<Post>;
pub type InMemoryCategoryRepository = InMemoryTable<Category>;
pub type InMemoryUserRepository = InMemoryTable<User>;
pub type InMemoryPermissionRepository = InMemoryTable<Permission>;

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> Result<Paginated<Post>, RepoError> {
        let mut matching = self.select(|post| filter.matches(post)).await;
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.per_page as usize)
            .collect();

        Ok(Paginated {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    async fn count_by_status(&self, status: PostStatus) -> Result<u64, RepoError> {
        let filter = PostFilter {
            status: Some(status),
            ..Default::default()
        };
        Ok(self.select(|post| filter.matches(post)).await.len() as u64)
    }

    async fn trash_many(&self, ids: &[Uuid]) -> Result<u64, RepoError> {
        let mut affected = 0;
        for id in ids {
            let trashed = self
                .modify(*id, |post| {
                    if post.deleted_at.is_some() {
                        return false;
                    }
                    post.deleted_at = Some(chrono::Utc::now());
                    true
                })
                .await;
            if trashed == Some(true) {
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn set_bring_to_light(&self, id: Uuid, value: bool) -> Result<(), RepoError> {
        self.modify(id, |post| {
            post.bring_to_light = value;
            post.touch();
        })
        .await
        .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let mut categories = self.select(|c| c.deleted_at.is_none()).await;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self.select(|u| u.email == email).await.into_iter().next())
    }
}

#[async_trait]
impl PermissionRepository for InMemoryPermissionRepository {
    async fn list(&self) -> Result<Vec<Permission>, RepoError> {
        let mut permissions = self.select(|p| p.deleted_at.is_none()).await;
        permissions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(permissions)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Permission>, RepoError> {
        Ok(self.select(|p| p.name == name).await.into_iter().next())
    }
}
