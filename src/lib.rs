//! Inventory maintenance
//!
//! Equipment inventory schema plus two one-shot MongoDB maintenance tools:
//! an audit listing privileged user accounts and a bulk fix for a
//! misspelled equipment category.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use db::Database;
use models::BulkUpdate;
use repository::Repository;
use services::{audit::AuditReport, Services};

/// Connect, collect privileged accounts, disconnect.
pub async fn run_admin_audit(config: &AppConfig) -> AppResult<AuditReport> {
    Database::scoped(&config.database, |database| async move {
        let services = Services::new(Repository::new(&database, config), config);
        services.audit.find_admins().await
    })
    .await
}

/// Connect, apply the configured category correction, disconnect.
pub async fn run_category_fix(config: &AppConfig) -> AppResult<BulkUpdate> {
    Database::scoped(&config.database, |database| async move {
        let services = Services::new(Repository::new(&database, config), config);
        services.category_fix.run().await
    })
    .await
}
