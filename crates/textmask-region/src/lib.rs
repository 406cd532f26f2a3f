//! textmask-region - Contour tracing for binary images
//!
//! This crate provides:
//!
//! - **Border following** - every outer and hole border of a 1 bpp image
//! - **Contour forest** - parent / first child / sibling relations among
//!   the traced borders, stored as an arena with `Option` links
//!
//! # Examples
//!
//! ```
//! use textmask_core::{Pix, PixelDepth};
//! use textmask_region::{BorderKind, find_contours};
//!
//! let pix = Pix::new(10, 10, PixelDepth::Bit1).unwrap();
//! let mut pix_mut = pix.try_into_mut().unwrap();
//! for y in 2..6 {
//!     for x in 2..6 {
//!         pix_mut.set_pixel(x, y, 1).unwrap();
//!     }
//! }
//! let pix: Pix = pix_mut.into();
//!
//! let tree = find_contours(&pix).unwrap();
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree.contour(0).unwrap().kind, BorderKind::Outer);
//! ```

pub mod contour;
mod error;
pub mod trace;

pub use contour::{Ancestors, BorderKind, Contour, ContourNode, ContourTree, Siblings};
pub use error::{RegionError, RegionResult};
pub use trace::find_contours;
