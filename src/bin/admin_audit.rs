//! Lists every user account considered privileged.
//!
//! An account qualifies through a privileged role, the `isAdmin` flag, or a
//! known administrator name. Exits with status 1 on any error.

use std::process::ExitCode;

use inventory_maintenance::{config::LoggingConfig, run_admin_audit, telemetry, AppConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables from .env file
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

    match run_admin_audit(&config).await {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Admin audit failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
