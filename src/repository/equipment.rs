//! Equipment collection access

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ReturnDocument,
    Collection,
};

use super::{EquipmentStore, EQUIPMENT_COLLECTION};
use crate::{db::Database, error::AppResult, models::Equipment};

#[derive(Clone)]
pub struct EquipmentRepository {
    collection: Collection<Equipment>,
}

impl EquipmentRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(EQUIPMENT_COLLECTION),
        }
    }
}

#[async_trait]
impl EquipmentStore for EquipmentRepository {
    async fn insert(&self, mut record: Equipment) -> AppResult<Equipment> {
        let result = self.collection.insert_one(&record).await?;
        record.id = result.inserted_id.as_object_id();
        Ok(record)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Equipment>> {
        let record = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(record)
    }

    async fn find_all(&self) -> AppResult<Vec<Equipment>> {
        let cursor = self.collection.find(doc! {}).await?;
        let records = cursor.try_collect().await?;
        Ok(records)
    }

    async fn update(&self, id: ObjectId, set: Document) -> AppResult<Option<Equipment>> {
        let record = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(record)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
