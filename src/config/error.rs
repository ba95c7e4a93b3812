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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Output column name cannot be empty: {0}")]
    EmptyColumnName(&'static str),

    #[error("Score and rank columns must have different names")]
    DuplicateColumnName,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
