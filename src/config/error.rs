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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid assistant request timeout")]
    InvalidTimeout,

    #[error("Assistant temperature must be between 0.0 and 1.5")]
    InvalidTemperature,

    #[error("Assistant base URL must be an http(s) URL")]
    InvalidBaseUrl,

    #[error("Shared secret must be at least 12 characters in production")]
    WeakSharedSecret,

    #[error("Commit latency exceeds maximum allowed (30s)")]
    CommitLatencyTooLong,
}
