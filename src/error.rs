//! Error types shared across the crate.

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Error value returned by error-level log calls.
///
/// Carries nothing beyond the logged message; it exists so call sites can
/// write `return Err(errorf!("..."))`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LogError {
    message: String,
}

impl LogError {
    /// Create an error mirroring the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The logged message this error mirrors.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// One or more semantic checks failed.
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A global tracing subscriber could not be installed.
    #[error("Subscriber error: {0}")]
    Subscriber(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
