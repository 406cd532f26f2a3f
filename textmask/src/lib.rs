//! textmask - Text region masks for OCR preprocessing
//!
//! Finds text-bearing regions in a crop (a license plate, a document
//! snippet) and produces a 0/255 mask separating strokes from their
//! local background.
//!
//! # Overview
//!
//! - Raster container with 1, 8 and 32 bpp images
//! - Canny edge detection
//! - Binary erosion and dilation
//! - Otsu thresholding
//! - Border following with a contour hierarchy
//! - The text mask pipeline and plate bounds estimation
//!
//! # Example
//!
//! ```
//! use textmask::recog::{TextMaskOptions, text_binary_mask};
//! use textmask::{Pix, PixelDepth};
//!
//! let pix = Pix::new(64, 32, PixelDepth::Bit8).unwrap();
//! let mask = text_binary_mask(&pix, &TextMaskOptions::default()).unwrap();
//! assert_eq!(mask.width(), 164);
//! assert_eq!(mask.depth(), PixelDepth::Bit8);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use textmask_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use textmask_color as color;
pub use textmask_filter as filter;
pub use textmask_morph as morph;
pub use textmask_recog as recog;
pub use textmask_region as region;
