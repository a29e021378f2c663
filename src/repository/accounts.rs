//! User account access (read-only)

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;

use super::{AccountStore, USERS_COLLECTION};
use crate::{
    db::Database,
    error::AppResult,
    models::{AdminAccount, AdminCriteria},
};

#[derive(Clone)]
pub struct AccountsRepository {
    collection: Collection<AdminAccount>,
}

impl AccountsRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl AccountStore for AccountsRepository {
    /// Accounts in natural order; no sorting or paging.
    async fn find_admins(&self, criteria: &AdminCriteria) -> AppResult<Vec<AdminAccount>> {
        let cursor = self.collection.find(criteria.filter()).await?;
        let accounts = cursor.try_collect().await?;
        Ok(accounts)
    }
}
