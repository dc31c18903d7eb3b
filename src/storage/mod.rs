//! Identifier-keyed persistence used by the resource services.
//!
//! Every entity gets its own [`Repository`]; the repository assigns the
//! integer identifier on insert, so callers never pick one themselves.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{bson::doc, Database};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::StorageError,
    models::{Order, OrderItem, Product},
};

pub mod memory;
pub mod mongo;

pub use memory::MemoryRepository;
pub use mongo::MongoRepository;

pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection (table) name in the backing store.
    const COLLECTION: &'static str;

    /// Stored field holding a reference to an owning record, if any.
    const PARENT_FIELD: Option<&'static str> = None;

    fn set_id(&mut self, id: i64);

    fn parent_id(&self) -> Option<i64> {
        None
    }
}

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Stores `entity` under a freshly generated identifier and returns it.
    async fn insert(&self, entity: E) -> Result<E, StorageError>;

    async fn find(&self, id: i64) -> Result<Option<E>, StorageError>;

    /// All rows, ascending by identifier (which is insertion order).
    async fn find_all(&self) -> Result<Vec<E>, StorageError>;

    async fn find_by_parent(&self, parent_id: i64) -> Result<Vec<E>, StorageError>;

    /// Overwrites the row at `id`. `None` if there is no such row.
    async fn replace(&self, id: i64, entity: E) -> Result<Option<E>, StorageError>;

    /// `false` if there was nothing to remove.
    async fn remove(&self, id: i64) -> Result<bool, StorageError>;
}

#[derive(Clone)]
enum Backend {
    Mongo(Database),
    Memory,
}

/// One repository per entity, all bound to the same backend.
#[derive(Clone)]
pub struct Storage {
    backend: Backend,
    pub products: Arc<dyn Repository<Product>>,
    pub orders: Arc<dyn Repository<Order>>,
    pub order_items: Arc<dyn Repository<OrderItem>>,
}

impl Storage {
    pub fn mongo(db: Database) -> Self {
        Storage {
            products: Arc::new(MongoRepository::<Product>::new(&db)),
            orders: Arc::new(MongoRepository::<Order>::new(&db)),
            order_items: Arc::new(MongoRepository::<OrderItem>::new(&db)),
            backend: Backend::Mongo(db),
        }
    }

    pub fn memory() -> Self {
        Storage {
            backend: Backend::Memory,
            products: Arc::new(MemoryRepository::<Product>::new()),
            orders: Arc::new(MemoryRepository::<Order>::new()),
            order_items: Arc::new(MemoryRepository::<OrderItem>::new()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Mongo(_) => "mongo",
            Backend::Memory => "memory",
        }
    }

    pub async fn ping(&self) -> Result<(), StorageError> {
        match &self.backend {
            Backend::Mongo(db) => {
                db.run_command(doc! { "ping": 1 }, None).await?;
                Ok(())
            }
            Backend::Memory => Ok(()),
        }
    }
}
