//! Error types for dataset construction and audit execution.
//!
//! The core never recovers locally: every failure is surfaced as a typed
//! error and the caller receives either a complete report or an error,
//! never a partial result.

use thiserror::Error;

/// Main error type for tabaudit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Supplied data is not a well-formed rectangular dataset
    #[error("Invalid tabular input: {reason}")]
    InvalidInput { reason: String },

    /// Z-score threshold outside the accepted range
    #[error("Invalid z-score threshold {value}: must be a positive finite number")]
    InvalidThreshold { value: f64 },

    /// Any failure not classified above, surfaced rather than swallowed
    #[error("Unexpected audit failure: {context}")]
    UnexpectedFailure { context: String },
}

/// Convenience type alias for Results with AuditError
pub type Result<T> = std::result::Result<T, AuditError>;

impl AuditError {
    /// Creates an invalid input error for malformed tabular data.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid threshold error.
    pub fn invalid_threshold(value: f64) -> Self {
        Self::InvalidThreshold { value }
    }

    /// Creates an unexpected failure error with context.
    pub fn unexpected(context: impl Into<String>) -> Self {
        Self::UnexpectedFailure {
            context: context.into(),
        }
    }
}
