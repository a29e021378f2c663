//! User account model, as read by the admin audit

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::config::AuditConfig;

/// Stored user account. The `users` collection is not schema-enforced, so
/// every field except the id may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    /// Opaque, read as stored. Never printed.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub gmail: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
}

/// Rules deciding whether an account is privileged: a privileged role,
/// the `isAdmin` flag, or a known administrator name.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCriteria {
    pub roles: Vec<String>,
    pub names: Vec<String>,
}

impl AdminCriteria {
    /// Query document selecting every matching account
    pub fn filter(&self) -> Document {
        doc! {
            "$or": [
                { "role": { "$in": self.roles.clone() } },
                { "isAdmin": true },
                { "name": { "$in": self.names.clone() } },
            ]
        }
    }

    /// Same predicate as [`AdminCriteria::filter`], evaluated locally
    #[cfg(test)]
    pub fn matches(&self, account: &AdminAccount) -> bool {
        account.is_admin
            || self.roles.iter().any(|role| *role == account.role)
            || self.names.iter().any(|name| *name == account.name)
    }
}

impl From<&AuditConfig> for AdminCriteria {
    fn from(config: &AuditConfig) -> Self {
        Self {
            roles: config.admin_roles.clone(),
            names: config.admin_names.clone(),
        }
    }
}
