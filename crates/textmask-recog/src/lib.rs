//! textmask-recog - Text masking for OCR preprocessing
//!
//! This crate provides:
//!
//! - **Text masking**: find text-like regions through edge contours and
//!   binarize each one against its own surroundings
//! - **Plate bounds**: a coarse rotated box around the dark content of a
//!   plate crop
//!
//! # Quick Start
//!
//! ```
//! use textmask_core::{Pix, PixMut, PixelDepth};
//! use textmask_recog::textmask::{TextMaskOptions, text_binary};
//!
//! let mut pm = PixMut::new(120, 80, PixelDepth::Bit8).unwrap();
//! pm.set_all_arbitrary(240).unwrap();
//! for y in 30..50 {
//!     for x in 40..60 {
//!         pm.set_pixel(x, y, 10).unwrap();
//!     }
//! }
//! let pix: Pix = pm.into();
//!
//! let result = text_binary(&pix, &TextMaskOptions::default()).unwrap();
//! assert_eq!(result.mask.width(), 220);
//! ```
//!
//! # Modules
//!
//! - [`textmask`]: Edge-contour text region masking
//! - [`platebounds`]: Plate bounds estimation

mod error;
pub mod platebounds;
pub mod textmask;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use platebounds::{PlateBounds, PlateBoundsOptions, plate_bounds};
pub use textmask::{
    EdgeMap, Region, RegionClassifier, TextMask, TextMaskOptions, ThresholdPair,
    text_binary, text_binary_mask,
};

// Re-export core for convenience
pub use textmask_core;
