//! Category typo correction

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{BulkUpdate, CategoryCorrection},
    repository::CategoryStore,
};

#[derive(Clone)]
pub struct CategoryFixService {
    store: Arc<dyn CategoryStore>,
    correction: CategoryCorrection,
}

impl CategoryFixService {
    pub fn new(store: Arc<dyn CategoryStore>, correction: CategoryCorrection) -> Self {
        Self { store, correction }
    }

    /// Rewrite every matching category in one bulk update.
    ///
    /// Not transactional: an interrupted run leaves the already rewritten
    /// documents corrected, and running again only touches the rest.
    pub async fn run(&self) -> AppResult<BulkUpdate> {
        tracing::info!(
            "Replacing category '{}' with '{}'",
            self.correction.from,
            self.correction.to
        );

        let result = self.store.apply(&self.correction).await?;

        tracing::info!(
            "Category fix matched {} and modified {} record(s)",
            result.matched,
            result.modified
        );
        Ok(result)
    }
}
