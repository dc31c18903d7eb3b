use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Entity, Repository};
use crate::error::StorageError;

/// Process-local repository. Reads share the lock; writes take it exclusively,
/// so a replace or remove on one id cannot interleave with another write.
pub struct MemoryRepository<E> {
    rows: RwLock<BTreeMap<i64, E>>,
    next_id: AtomicI64,
}

impl<E> MemoryRepository<E> {
    pub fn new() -> Self {
        MemoryRepository {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn insert(&self, mut entity: E) -> Result<E, StorageError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(id);
        self.rows.write().await.insert(id, entity.clone());
        Ok(entity)
    }

    async fn find(&self, id: i64) -> Result<Option<E>, StorageError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, StorageError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_parent(&self, parent_id: i64) -> Result<Vec<E>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|e| e.parent_id() == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn replace(&self, id: i64, mut entity: E) -> Result<Option<E>, StorageError> {
        let mut rows = self.rows.write().await;
        let Some(slot) = rows.get_mut(&id) else {
            return Ok(None);
        };
        entity.set_id(id);
        *slot = entity.clone();
        Ok(Some(entity))
    }

    async fn remove(&self, id: i64) -> Result<bool, StorageError> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}
