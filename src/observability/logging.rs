//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Choose JSON or pretty output from config
//! - Configure log level from config and environment

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggerConfig};
use crate::error::ConfigError;

/// Build the subscriber filter: `RUST_LOG` if set, otherwise the config.
pub fn build_filter(config: &LoggerConfig) -> Result<EnvFilter, ConfigError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config.filter_directives())
            .map_err(|e| ConfigError::Subscriber(e.to_string())),
    }
}

/// Install the global tracing subscriber described by `config`.
pub fn init_logging(config: &LoggerConfig) -> Result<(), ConfigError> {
    let filter = build_filter(config)?;
    let json = config.format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .try_init()
        .map_err(|e| ConfigError::Subscriber(e.to_string()))?;

    tracing::debug!(
        level = %config.level,
        format = ?config.format,
        sink = ?config.sink,
        "Tracing subscriber initialized"
    );
    Ok(())
}
