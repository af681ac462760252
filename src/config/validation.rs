//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the level names a known level
//! - Check filter directives parse as an `EnvFilter`
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::LoggerConfig;
use crate::sink::Level;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown level '{0}' (expected debug, info or error)")]
    UnknownLevel(String),

    #[error("invalid filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },
}

/// Run every semantic check against `config`.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(level) = config.level.parse::<Level>() {
        errors.push(ValidationError::UnknownLevel(level));
    }

    if let Some(directive) = &config.filter {
        if let Err(e) = EnvFilter::try_new(directive) {
            errors.push(ValidationError::InvalidFilter {
                directive: directive.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&LoggerConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let config = LoggerConfig {
            level: "chatty".into(),
            filter: Some("ctxlog=notalevel".into()),
            ..LoggerConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], ValidationError::UnknownLevel("chatty".into()));
        assert!(matches!(errors[1], ValidationError::InvalidFilter { .. }));
    }

    #[test]
    fn test_valid_filter() {
        let config = LoggerConfig {
            filter: Some("ctxlog=debug,tokio=warn".into()),
            ..LoggerConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
