//! Admin account audit

use std::{fmt, sync::Arc};

use chrono::Utc;
use mongodb::bson::DateTime;

use crate::{
    error::AppResult,
    models::{AdminAccount, AdminCriteria},
    repository::AccountStore,
};

const NOT_SET: &str = "Not set";

#[derive(Clone)]
pub struct AuditService {
    store: Arc<dyn AccountStore>,
    criteria: AdminCriteria,
}

impl AuditService {
    pub fn new(store: Arc<dyn AccountStore>, criteria: AdminCriteria) -> Self {
        Self { store, criteria }
    }

    /// Collect every account matching the admin criteria
    pub async fn find_admins(&self) -> AppResult<AuditReport> {
        tracing::debug!(
            "Looking for admins by role {:?} or name {:?}",
            self.criteria.roles,
            self.criteria.names
        );

        let accounts = self.store.find_admins(&self.criteria).await?;
        tracing::info!("Found {} admin account(s)", accounts.len());

        Ok(AuditReport { accounts })
    }
}

/// Human-readable listing of privileged accounts, one numbered line each
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub accounts: Vec<AdminAccount>,
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.accounts.is_empty() {
            return write!(f, "No admin accounts found.");
        }

        write!(f, "Found {} admin account(s):", self.accounts.len())?;
        for (index, account) in self.accounts.iter().enumerate() {
            write!(f, "\n{}", AccountLine(index + 1, account))?;
        }
        Ok(())
    }
}

struct AccountLine<'a>(usize, &'a AdminAccount);

impl fmt::Display for AccountLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let AccountLine(number, account) = self;

        let gmail = account
            .gmail
            .as_deref()
            .filter(|g| !g.trim().is_empty())
            .unwrap_or(NOT_SET);
        let created = account
            .created_at
            .map(format_timestamp)
            .unwrap_or_else(|| NOT_SET.to_string());
        let id = account
            .id
            .map(|id| id.to_hex())
            .unwrap_or_else(|| NOT_SET.to_string());

        write!(
            f,
            "{}. {} | Role: {} | isAdmin: {} | Gmail: {} | Created: {} | ID: {}",
            number, account.name, account.role, account.is_admin, gmail, created, id
        )
    }
}

fn format_timestamp(timestamp: DateTime) -> String {
    let timestamp: chrono::DateTime<Utc> = timestamp.to_chrono();
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
