//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be within (0, 1), got {value}")]
    InvalidFraction { field: &'static str, value: f64 },

    #[error("Fallback timeout must be between 1 and 60000 ms")]
    InvalidTimeout,

    #[error("Log level must not be empty")]
    EmptyLogLevel,
}
