//! Tracing subscriber setup shared by the binaries

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber. Log output goes to stderr so that
/// reports printed on stdout stay clean.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "inventory_maintenance={level},admin_audit={level},fix_category={level},mongodb=warn",
            level = config.level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
