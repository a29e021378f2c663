//! Repository layer for database operations

pub mod accounts;
pub mod categories;
pub mod equipment;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::{
    config::AppConfig,
    db::Database,
    error::AppResult,
    models::{AdminAccount, AdminCriteria, BulkUpdate, CategoryCorrection, Equipment},
};

/// Collection holding equipment inventory records
pub const EQUIPMENT_COLLECTION: &str = "equipment";

/// Collection holding user accounts
pub const USERS_COLLECTION: &str = "users";

/// Persistence of equipment records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// Insert a record and return it with its generated id
    async fn insert(&self, record: Equipment) -> AppResult<Equipment>;

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Equipment>>;

    async fn find_all(&self) -> AppResult<Vec<Equipment>>;

    /// Apply a `$set` body and return the updated record, if it exists
    async fn update(&self, id: ObjectId, set: Document) -> AppResult<Option<Equipment>>;

    /// Returns whether a record was removed
    async fn delete(&self, id: ObjectId) -> AppResult<bool>;
}

/// Read access to user accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_admins(&self, criteria: &AdminCriteria) -> AppResult<Vec<AdminAccount>>;
}

/// Bulk rewrite of `category` values
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn apply(&self, correction: &CategoryCorrection) -> AppResult<BulkUpdate>;
}

/// Main repository struct holding one repository per collection
#[derive(Clone)]
pub struct Repository {
    pub equipment: equipment::EquipmentRepository,
    pub accounts: accounts::AccountsRepository,
    pub categories: categories::CategoriesRepository,
}

impl Repository {
    /// Create a new repository on the given database
    pub fn new(database: &Database, config: &AppConfig) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(database),
            accounts: accounts::AccountsRepository::new(database),
            categories: categories::CategoriesRepository::new(
                database,
                &config.category_fix.collection,
            ),
        }
    }
}
