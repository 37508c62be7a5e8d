//! Diagnostic logging setup

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber from logging configuration.
///
/// The `RUST_LOG` environment variable, when set, takes precedence over
/// the configured level. Call once per process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
    }

    Ok(())
}
