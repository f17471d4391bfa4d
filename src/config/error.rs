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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Embedding dimensions must be between 1 and 4096")]
    InvalidDimensions,

    #[error("Session TTL must be positive")]
    InvalidSessionTtl,

    #[error("{0} must be at least 1")]
    InvalidTopN(&'static str),

    #[error("{0} must be a finite, non-negative number")]
    InvalidWeight(&'static str),

    #[error("Cost ceiling must be positive")]
    InvalidCostCeiling,
}
