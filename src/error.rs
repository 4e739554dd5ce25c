//! Error types for the quant-econometrics library.

use thiserror::Error;

/// Result type alias for econometrics operations.
pub type Result<T> = std::result::Result<T, EconometricsError>;

/// Errors that can occur while transforming series or fitting models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EconometricsError {
    /// An argument was outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// No fitted model exists for the requested column.
    #[error("no fitted model for column '{column}'")]
    NotFitted { column: String },

    /// Every candidate order failed for a column.
    #[error("no viable ARIMA model for column '{column}'")]
    NoViableModel { column: String },

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl EconometricsError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
