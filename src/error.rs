//! Error types shared across the registry, authenticator, store and HTTP surface.

use thiserror::Error;

/// Faults raised by a key-value backend or by record (de)serialization.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Codec error: {0}")]
    Codec(String),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Codec(err.to_string())
    }
}

/// Errors surfaced by registry and authentication operations.
///
/// Validation, conflict and not-found messages are shown to API callers
/// verbatim, so they carry no prefix.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidAgent(String),

    #[error("{0}")]
    AgentExists(String),

    #[error("{0}")]
    AgentNotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
