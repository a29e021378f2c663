//! Configuration management for the maintenance tools

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Roles that always mark an account as privileged
pub const DEFAULT_ADMIN_ROLES: &[&str] = &["admin", "superadmin"];

/// Display names of accounts known to be administrators
pub const DEFAULT_ADMIN_NAMES: &[&str] = &["Ana", "Admin", "Administrator"];

/// Collection holding the documents whose `category` gets corrected
pub const DEFAULT_CATEGORY_COLLECTION: &str = "equipment";

pub const MISSPELLED_CATEGORY: &str = "Smsrt kartica";
pub const CORRECTED_CATEGORY: &str = "Smart kartica";

/// Environment variable carrying the MongoDB connection string
pub const CONNECTION_STRING_VAR: &str = "MONGODB_URI";

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Database name; falls back to the one in the connection string
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuditConfig {
    pub admin_roles: Vec<String>,
    pub admin_names: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CategoryFixConfig {
    pub collection: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub category_fix: CategoryFixConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::build(
            Some(&run_mode),
            Self::environment(None),
            env::var(CONNECTION_STRING_VAR).ok(),
        )
    }

    fn build(
        run_mode: Option<&str>,
        environment: Environment,
        connection_string: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false));

        if let Some(mode) = run_mode {
            builder = builder.add_source(File::with_name(&format!("config/{}", mode)).required(false));
        }

        let config: AppConfig = builder
            // Add environment variables (with prefix INVENTORY_)
            .add_source(environment)
            // MONGODB_URI wins over everything else
            .set_override_option("database.url", connection_string)?
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn environment(source: Option<config::Map<String, String>>) -> Environment {
        Environment::with_prefix("INVENTORY")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("audit.admin_roles")
            .with_list_parse_key("audit.admin_names")
            .try_parsing(true)
            .source(source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message(format!(
                "{} cannot be empty",
                CONNECTION_STRING_VAR
            )));
        }
        if self.category_fix.from == self.category_fix.to {
            return Err(ConfigError::Message(format!(
                "category_fix.from and category_fix.to are both '{}'",
                self.category_fix.from
            )));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            admin_roles: DEFAULT_ADMIN_ROLES.iter().map(|s| s.to_string()).collect(),
            admin_names: DEFAULT_ADMIN_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for CategoryFixConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_CATEGORY_COLLECTION.to_string(),
            from: MISSPELLED_CATEGORY.to_string(),
            to: CORRECTED_CATEGORY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_source(pairs: &[(&str, &str)]) -> Environment {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::environment(Some(map))
    }

    #[test]
    fn test_missing_connection_string_is_rejected() {
        let result = AppConfig::build(None, env_source(&[]), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_connection_string_is_rejected() {
        let result = AppConfig::build(None, env_source(&[]), Some("  ".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::build(
            None,
            env_source(&[]),
            Some("mongodb://localhost:27017/inventory".to_string()),
        )
        .unwrap();

        assert_eq!(config.database.url, "mongodb://localhost:27017/inventory");
        assert_eq!(config.database.name, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.audit.admin_roles, vec!["admin", "superadmin"]);
        assert!(config.audit.admin_names.contains(&"Ana".to_string()));
        assert_eq!(config.category_fix.from, MISSPELLED_CATEGORY);
        assert_eq!(config.category_fix.to, CORRECTED_CATEGORY);
        assert_eq!(config.category_fix.collection, "equipment");
    }

    #[test]
    fn test_connection_string_overrides_environment() {
        let config = AppConfig::build(
            None,
            env_source(&[("INVENTORY_DATABASE__URL", "mongodb://ignored:27017")]),
            Some("mongodb://db.internal:27017".to_string()),
        )
        .unwrap();

        assert_eq!(config.database.url, "mongodb://db.internal:27017");
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::build(
            None,
            env_source(&[
                ("INVENTORY_DATABASE__NAME", "inventory"),
                ("INVENTORY_AUDIT__ADMIN_NAMES", "Ana,Marko"),
                ("INVENTORY_CATEGORY_FIX__COLLECTION", "items"),
            ]),
            Some("mongodb://localhost:27017".to_string()),
        )
        .unwrap();

        assert_eq!(config.database.name.as_deref(), Some("inventory"));
        assert_eq!(config.audit.admin_names, vec!["Ana", "Marko"]);
        assert_eq!(config.audit.admin_roles, vec!["admin", "superadmin"]);
        assert_eq!(config.category_fix.collection, "items");
    }

    #[test]
    fn test_identical_category_values_are_rejected() {
        let result = AppConfig::build(
            None,
            env_source(&[("INVENTORY_CATEGORY_FIX__TO", MISSPELLED_CATEGORY)]),
            Some("mongodb://localhost:27017".to_string()),
        );

        assert!(result.is_err());
    }
}
