//! Error types for the test framework

use thiserror::Error;

/// A failed check recorded by [`crate::RegParams`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Pix comparison failed
    #[error("pix comparison failed at index {index}: {reason}")]
    PixMismatch { index: usize, reason: String },

    /// A boolean check failed
    #[error("check failed at index {index}: {what}")]
    CheckFailed { index: usize, what: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
