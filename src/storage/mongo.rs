use async_trait::async_trait;
use futures_util::StreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
    Collection, Database,
};

use super::{Entity, Repository};
use crate::error::StorageError;

// one `{ _id: <collection>, seq: <last id> }` document per entity collection
const COUNTERS: &str = "counters";

pub struct MongoRepository<E: Entity> {
    counters: Collection<Document>,
    collection: Collection<E>,
}

impl<E: Entity> MongoRepository<E> {
    pub fn new(db: &Database) -> Self {
        MongoRepository {
            counters: db.collection::<Document>(COUNTERS),
            collection: db.collection::<E>(E::COLLECTION),
        }
    }

    async fn next_id(&self) -> Result<i64, StorageError> {
        let opts = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": E::COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
                opts,
            )
            .await?
            .ok_or(StorageError::Sequence(E::COLLECTION))?;

        counter
            .get_i64("seq")
            .map_err(|_| StorageError::Sequence(E::COLLECTION))
    }

    async fn collect(&self, filter: Document) -> Result<Vec<E>, StorageError> {
        let find_opts = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let mut cursor = self.collection.find(filter, find_opts).await?;

        let mut items: Vec<E> = Vec::new();
        while let Some(res) = cursor.next().await {
            items.push(res?);
        }

        Ok(items)
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MongoRepository<E> {
    async fn insert(&self, mut entity: E) -> Result<E, StorageError> {
        let id = self.next_id().await?;
        entity.set_id(id);

        self.collection.insert_one(&entity, None).await?;

        Ok(entity)
    }

    async fn find(&self, id: i64) -> Result<Option<E>, StorageError> {
        Ok(self.collection.find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_all(&self) -> Result<Vec<E>, StorageError> {
        self.collect(doc! {}).await
    }

    async fn find_by_parent(&self, parent_id: i64) -> Result<Vec<E>, StorageError> {
        let Some(field) = E::PARENT_FIELD else {
            return Ok(Vec::new());
        };

        let mut filter = Document::new();
        filter.insert(field, parent_id);
        self.collect(filter).await
    }

    async fn replace(&self, id: i64, mut entity: E) -> Result<Option<E>, StorageError> {
        entity.set_id(id);

        let res = self
            .collection
            .replace_one(doc! { "_id": id }, &entity, None)
            .await?;

        if res.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(entity))
    }

    async fn remove(&self, id: i64) -> Result<bool, StorageError> {
        let res = self.collection.delete_one(doc! { "_id": id }, None).await?;
        Ok(res.deleted_count > 0)
    }
}
