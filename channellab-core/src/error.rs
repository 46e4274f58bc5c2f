//! Error taxonomy for the core computations.

use thiserror::Error;

/// Errors raised by core signal and return computations.
///
/// All of these are raised before any computation starts; nothing here is
/// retryable since every routine is a pure function of its inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("close price at index {index} is not finite ({value})")]
    NonFiniteClose { index: usize, value: f64 },

    #[error("close price at index {index} must be positive to take a log return ({value})")]
    NonPositiveClose { index: usize, value: f64 },

    #[error("timestamp column has {timestamps} rows but close column has {closes}")]
    LengthMismatch { closes: usize, timestamps: usize },
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidInput`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
