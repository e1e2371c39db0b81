use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkpost_core::domain::Permission;
use inkpost_core::error::RepoError;
use inkpost_core::ports::{BaseRepository, PermissionChecker, PermissionRepository};

use super::InMemoryPermissionRepository;

/// Permission grants held in process memory.
pub struct InMemoryPermissionChecker {
    permissions: Arc<InMemoryPermissionRepository>,
    grants: RwLock<HashMap<Uuid, HashSet<Uuid>>>,
}

impl InMemoryPermissionChecker {
    pub fn new(permissions: Arc<InMemoryPermissionRepository>) -> Self {
        Self {
            permissions,
            grants: RwLock::new(HashMap::new()),
        }
    }

    /// Grant `name` to `actor_id`, creating the permission if it does not exist yet.
    pub async fn grant(&self, actor_id: Uuid, name: &str) -> Result<(), RepoError> {
        let permission = match self.permissions.find_by_name(name).await? {
            Some(existing) => existing,
            None => self.permissions.create(Permission::new(name.to_owned())).await?,
        };

        self.grants
            .write()
            .await
            .entry(actor_id)
            .or_default()
            .insert(permission.id);
        Ok(())
    }

    pub async fn revoke(&self, actor_id: Uuid, name: &str) -> Result<(), RepoError> {
        if let Some(permission) = self.permissions.find_by_name(name).await?
            && let Some(held) = self.grants.write().await.get_mut(&actor_id)
        {
            held.remove(&permission.id);
        }
        Ok(())
    }
}

#[async_trait]
impl PermissionChecker for InMemoryPermissionChecker {
    async fn has(&self, actor_id: Uuid, permission: &str) -> Result<bool, RepoError> {
        let Some(permission) = self.permissions.find_by_name(permission).await? else {
            return Ok(false);
        };
        if permission.deleted_at.is_some() {
            return Ok(false);
        }

        let grants = self.grants.read().await;
        Ok(grants
            .get(&actor_id)
            .is_some_and(|held| held.contains(&permission.id)))
    }
}
