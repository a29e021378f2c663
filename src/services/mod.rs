//! Business logic services

pub mod audit;
pub mod category_fix;
pub mod equipment;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    models::{AdminCriteria, CategoryCorrection},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub audit: audit::AuditService,
    pub category_fix: category_fix::CategoryFixService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(Arc::new(repository.equipment)),
            audit: audit::AuditService::new(
                Arc::new(repository.accounts),
                AdminCriteria::from(&config.audit),
            ),
            category_fix: category_fix::CategoryFixService::new(
                Arc::new(repository.categories),
                CategoryCorrection::new(&config.category_fix.from, &config.category_fix.to),
            ),
        }
    }
}
