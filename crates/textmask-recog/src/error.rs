//! Error types for textmask-recog

use thiserror::Error;

/// Errors that can occur during text masking operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] textmask_core::Error),

    /// Edge detection error
    #[error("filter error: {0}")]
    Filter(#[from] textmask_filter::FilterError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] textmask_morph::MorphError),

    /// Thresholding error
    #[error("color error: {0}")]
    Color(#[from] textmask_color::ColorError),

    /// Contour tracing error
    #[error("region error: {0}")]
    Region(#[from] textmask_region::RegionError),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for text masking operations
pub type RecogResult<T> = Result<T, RecogError>;
