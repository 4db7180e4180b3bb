//! Error types for promptvault.
//!
//! This module defines a unified error enum covering every failure category
//! in the system: local prompt loading, lookup-key resolution, version
//! parsing, and remote storage transport.

use thiserror::Error;

/// Unified error type for promptvault.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// We never panic in library code; errors are represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors (bad scheme/backend names, invalid patterns)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A prompt file is absent from the local tree or a snapshot
    #[error("Prompt file not found: {0}")]
    PromptFileNotFound(String),

    /// A prompt file exists but is not valid YAML or not a mapping
    #[error("Failed to parse prompt file: {0}")]
    PromptParse(String),

    /// The requested prompt key is absent from a document
    #[error("Prompt key not found: {0}")]
    PromptKeyNotFound(String),

    /// The requested field is absent from a prompt entry
    #[error("Prompt field not found: {0}")]
    PromptFieldNotFound(String),

    /// Lookup keys do not satisfy the path-resolution scheme
    #[error("Invalid lookup keys: {0}")]
    InvalidKeys(String),

    /// A version string is not three dot-separated non-negative integers
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    /// The requested version has no snapshot in remote storage
    #[error("Version not found: {0}")]
    VersionNotFound(String),

    /// A remote operation was requested but no remote is configured
    #[error("Remote storage not configured: {0}")]
    RemoteConfigurationMissing(String),

    /// The blob backend rejected our credentials or access rights
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Any other failure of the underlying storage transport
    #[error("Storage backend error: {0}")]
    StorageBackend(String),

    /// Serialization/deserialization errors outside prompt parsing
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
