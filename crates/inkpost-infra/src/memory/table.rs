use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkpost_core::domain::{Category, Permission, Post, SoftDeletes, User};
use inkpost_core::error::RepoError;
use inkpost_core::ports::BaseRepository;

/// A storable domain entity.
pub trait Record: SoftDeletes + Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

impl Record for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Permission {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// One entity type kept in a HashMap behind an async RwLock.
pub struct InMemoryTable<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T: Record> InMemoryTable<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Clone every row matching `predicate`.
    pub async fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let rows = self.rows.read().await;
        rows.values().filter(|row| predicate(row)).cloned().collect()
    }

    /// Apply `f` to one row; `None` when the row does not exist.
    pub async fn modify<R>(&self, id: Uuid, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut rows = self.rows.write().await;
        rows.get_mut(&id).map(f)
    }
}

impl<T: Record> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T, Uuid> for InMemoryTable<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn create(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&entity.id()) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn trash(&self, id: Uuid) -> Result<(), RepoError> {
        self.modify(id, |row| row.trash())
            .await
            .ok_or(RepoError::NotFound)
    }

    async fn restore(&self, id: Uuid) -> Result<(), RepoError> {
        self.modify(id, |row| row.restore())
            .await
            .ok_or(RepoError::NotFound)
    }
}
