//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DbConn, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use uuid::Uuid;

use inkpost_core::domain::{Category, Permission, Post, PostStatus, User};
use inkpost_core::error::RepoError;
use inkpost_core::ports::{
    CategoryRepository, PageRequest, Paginated, PermissionChecker, PermissionRepository,
    PostFilter, PostRepository, UserRepository,
};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::permission::{self, Entity as PermissionEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::entity::user_permission;
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL permission catalog repository.
pub type PostgresPermissionRepository = PostgresBaseRepository<PermissionEntity>;

fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = match local.chars().next() {
            Some(first) if local.len() > 1 => format!("{}***", first),
            _ => "***".to_string(),
        };
        format!("{}{}", masked_local, domain)
    } else {
        "***".to_string()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> Result<Paginated<Post>, RepoError> {
        tracing::debug!(?filter, page = page.page, "Listing posts");

        let mut query = PostEntity::find().filter(post::Column::DeletedAt.is_null());
        if let Some(author_id) = filter.author_id {
            query = query.filter(post::Column::AuthorId.eq(author_id));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(post::Column::CategoryId.eq(category_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(post::Column::Status.eq(post::Status::from(status)));
        }

        let total = query.clone().count(&self.db).await.map_err(map_db_err)?;
        let models = query
            .order_by_desc(post::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.per_page)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Paginated {
            items: models.into_iter().map(Into::into).collect(),
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    async fn count_by_status(&self, status: PostStatus) -> Result<u64, RepoError> {
        PostEntity::find()
            .filter(post::Column::Status.eq(post::Status::from(status)))
            .filter(post::Column::DeletedAt.is_null())
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn trash_many(&self, ids: &[Uuid]) -> Result<u64, RepoError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = PostEntity::update_many()
            .col_expr(post::Column::DeletedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(post::Column::Id.is_in(ids.iter().copied()))
            .filter(post::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn set_bring_to_light(&self, id: Uuid, value: bool) -> Result<(), RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::BringToLight, Expr::value(value))
            .col_expr(post::Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let models = CategoryEntity::find()
            .filter(category::Column::DeletedAt.is_null())
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PermissionRepository for PostgresPermissionRepository {
    async fn list(&self) -> Result<Vec<Permission>, RepoError> {
        let models = PermissionEntity::find()
            .filter(permission::Column::DeletedAt.is_null())
            .order_by_asc(permission::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Permission>, RepoError> {
        let result = PermissionEntity::find()
            .filter(permission::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

/// Permission lookup through the `user_permissions` join table.
///
/// Trashed permissions and trashed users grant nothing.
pub struct PostgresPermissionChecker {
    db: DbConn,
}

impl PostgresPermissionChecker {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PermissionChecker for PostgresPermissionChecker {
    async fn has(&self, actor_id: Uuid, permission_name: &str) -> Result<bool, RepoError> {
        let count = PermissionEntity::find()
            .join(JoinType::InnerJoin, permission::Relation::UserPermissions.def())
            .join(JoinType::InnerJoin, user_permission::Relation::User.def())
            .filter(user_permission::Column::UserId.eq(actor_id))
            .filter(permission::Column::Name.eq(permission_name))
            .filter(permission::Column::DeletedAt.is_null())
            .filter(user::Column::DeletedAt.is_null())
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
