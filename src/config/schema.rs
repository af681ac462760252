//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::validation::ValidationError;
use crate::error::ConfigError;
use crate::sink::Level;

/// Root configuration for the logging façade.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level (debug, info, error).
    pub level: String,

    /// Backend records are dispatched to.
    pub sink: SinkKind,

    /// Output format of the tracing subscriber.
    pub format: LogFormat,

    /// Extra `EnvFilter` directives, e.g. "ctxlog=debug,hyper=warn".
    /// Overrides `level` for the tracing subscriber when set.
    pub filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            sink: SinkKind::Tracing,
            format: LogFormat::Pretty,
            filter: None,
        }
    }
}

impl LoggerConfig {
    /// The configured level, parsed.
    pub fn parsed_level(&self) -> Result<Level, ConfigError> {
        self.level
            .parse()
            .map_err(|level| ConfigError::Validation(vec![ValidationError::UnknownLevel(level)]))
    }

    /// Directives for the tracing subscriber's `EnvFilter`.
    pub fn filter_directives(&self) -> String {
        match &self.filter {
            Some(filter) if !filter.trim().is_empty() => filter.clone(),
            _ => self.level.trim().to_ascii_lowercase(),
        }
    }
}

/// Backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Forward to the `tracing` subscriber.
    Tracing,
    /// Write JSON lines straight to stdout/stderr.
    Stdio,
}

/// Tracing subscriber output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.sink, SinkKind::Tracing);
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.parsed_level().unwrap(), Level::Info);
    }

    #[test]
    fn test_filter_directives() {
        let mut config = LoggerConfig {
            level: "DEBUG".into(),
            ..LoggerConfig::default()
        };
        assert_eq!(config.filter_directives(), "debug");

        config.filter = Some("ctxlog=error".into());
        assert_eq!(config.filter_directives(), "ctxlog=error");
    }

    #[test]
    fn test_unknown_level() {
        let config = LoggerConfig {
            level: "loud".into(),
            ..LoggerConfig::default()
        };
        assert!(matches!(
            config.parsed_level(),
            Err(ConfigError::Validation(errors)) if errors == vec![ValidationError::UnknownLevel("loud".into())]
        ));
    }
}
