//! textmask-color - Intensity thresholding
//!
//! - **Thresholding** ([`threshold`]): inverted fixed-threshold binarization
//!   and Otsu's automatic threshold selection

mod error;
pub mod threshold;

pub use error::{ColorError, ColorResult};
pub use threshold::{
    compute_otsu_threshold, gray_histogram, threshold_otsu_inverted, threshold_to_binary_inverted,
};
