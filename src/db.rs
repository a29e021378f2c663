//! MongoDB connection handle

use std::future::Future;

use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

use crate::{config::DatabaseConfig, error::AppResult};

/// Database used when neither the configuration nor the connection string names one
pub const DEFAULT_DATABASE_NAME: &str = "test";

/// A connected client bound to one database
#[derive(Clone, Debug)]
pub struct Database {
    client: Client,
    database: mongodb::Database,
}

impl Database {
    /// Parse the connection string, open the client and ping the server.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut options = ClientOptions::parse(config.url.as_str()).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let name = config
            .name
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&name);

        database.run_command(doc! { "ping": 1 }).await?;

        Ok(Self { client, database })
    }

    /// Run `f` against a fresh connection and shut the client down afterwards,
    /// whether `f` succeeded or not.
    pub async fn scoped<F, Fut, T>(config: &DatabaseConfig, f: F) -> AppResult<T>
    where
        F: FnOnce(Database) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let database = Self::connect(config).await?;
        tracing::info!("Connected to database {}", database.name());

        let result = f(database.clone()).await;

        database.close().await;
        tracing::info!("Database connection closed");

        result
    }

    pub fn name(&self) -> &str {
        self.database.name()
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    pub async fn close(self) {
        self.client.shutdown().await;
    }
}
