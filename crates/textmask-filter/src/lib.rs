//! textmask-filter - Gradient and edge filters
//!
//! - Sobel gradients with replicated image border
//! - Canny edge detection (non-maximum suppression + hysteresis)

pub mod edge;
mod error;

pub use edge::{CannyOptions, Gradient, canny, sobel_gradients};
pub use error::{FilterError, FilterResult};
