//! Shared components for CLI commands
//!
//! This module contains the logging setup used by every command
//! implementation.

use crate::Result;
use tracing::debug;

/// Set up structured logging for a command invocation
///
/// All log output goes to stderr; stdout stays reserved for query
/// results so pipelines see clean data. A `RUST_LOG` value in the
/// environment overrides the level derived from the flags.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("momotetsu_cards={}", log_level)));

    // Standard logging with timestamps
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
