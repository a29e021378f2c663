//! Corrects a misspelled equipment category in one bulk update.

use std::process::ExitCode;

use inventory_maintenance::{config::LoggingConfig, run_category_fix, telemetry, AppConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init(&LoggingConfig::default());
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(&config.logging);

    match run_category_fix(&config).await {
        Ok(result) => {
            tracing::info!(
                "Updated {} record(s) from '{}' to '{}'",
                result.modified,
                config.category_fix.from,
                config.category_fix.to
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Category fix failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
