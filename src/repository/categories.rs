//! Bulk category correction

use async_trait::async_trait;
use mongodb::{bson::Document, Collection};

use super::CategoryStore;
use crate::{
    db::Database,
    error::AppResult,
    models::{BulkUpdate, CategoryCorrection},
};

#[derive(Clone)]
pub struct CategoriesRepository {
    collection: Collection<Document>,
}

impl CategoriesRepository {
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }
}

#[async_trait]
impl CategoryStore for CategoriesRepository {
    /// Single `updateMany`, not wrapped in a transaction.
    async fn apply(&self, correction: &CategoryCorrection) -> AppResult<BulkUpdate> {
        let result = self
            .collection
            .update_many(correction.filter(), correction.update())
            .await?;

        Ok(BulkUpdate {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }
}
