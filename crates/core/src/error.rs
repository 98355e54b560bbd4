//! Error types for the promptsync CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, catalog, validation, and
//! serialization errors.

use thiserror::Error;

/// Unified error type for the promptsync CLI.
///
/// All functions in the application return `Result<T, AppError>`.
/// We never panic; errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (missing credential, bad config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A named prompt entry (or its document) is absent locally
    #[error("Not found: {0}")]
    NotFound(String),

    /// The quality gate rejected the prompt; carries every diagnostic
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Remote catalog errors; the collaborator's message passes through verbatim
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
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
