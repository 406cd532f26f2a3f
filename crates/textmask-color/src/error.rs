//! Error types for textmask-color

use thiserror::Error;

/// Errors that can occur during thresholding
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] textmask_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
