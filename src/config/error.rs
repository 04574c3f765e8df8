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
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Admin password must be changed from the default in production")]
    DefaultPasswordInProduction,

    #[error("Session TTL must be greater than zero")]
    InvalidSessionTtl,

    #[error("Analytics top_n must be greater than zero")]
    InvalidTopN,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
