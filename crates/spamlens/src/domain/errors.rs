//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input rejected before any side effect happened
    #[error("Validation error: {0}")]
    Validation(String),

    /// The external classifier failed; nothing was stored
    #[error("Classifier error: {0}")]
    Upstream(#[from] ClassificationFailure),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage<E: std::fmt::Display>(err: E) -> Self {
        Self::Storage(err.to_string())
    }

    /// Whether the caller can fix the request and try again
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Why a classification call produced no prediction
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassificationFailure {
    #[error("classifier unreachable: {0}")]
    Transport(String),

    #[error("classifier timed out after {0} ms")]
    Timeout(u64),

    #[error("classifier returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed classifier response: {0}")]
    Malformed(String),

    #[error("invalid prediction: {0}")]
    InvalidPrediction(String),
}
