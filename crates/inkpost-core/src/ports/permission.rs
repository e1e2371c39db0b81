//! Permission lookup port consulted by every policy.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RepoError;

/// Answers whether an actor holds a named permission.
///
/// Role assignment and the permission catalog live behind this trait;
/// policies only ever ask about one name at a time.
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    async fn has(&self, actor_id: Uuid, permission: &str) -> Result<bool, RepoError>;
}
