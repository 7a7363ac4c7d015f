//! Centralized error types for Senti.

use std::time::Duration;
use thiserror::Error;

/// Failure of a single classification attempt.
///
/// These never escape as transport errors; the dispatcher folds them into
/// the `error` field of the response body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// Network or IO failure reaching the provider. Displays the raw message.
    #[error("{0}")]
    Transport(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("timed out after {0:?}")]
    TimedOut(Duration),

    #[error("classification task ended without a result")]
    Abandoned,
}

/// Startup and configuration errors.
#[derive(Error, Debug)]
pub enum SentiError {
    #[error("Missing credential: {0} is not set")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Senti operations.
pub type SentiResult<T> = Result<T, SentiError>;

impl SentiError {
    /// Create a missing credential error.
    pub fn missing_credential(name: impl Into<String>) -> Self {
        Self::MissingCredential(name.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
