//! textmask-core - Basic data structures for the text-mask pipeline
//!
//! This crate provides the fundamental data structures used throughout
//! the workspace:
//!
//! - [`Pix`] / [`PixMut`] - The raster container (immutable / mutable)
//! - [`Box`] - Axis-aligned rectangle regions
//! - [`Point`] / [`Pta`] - Integer points and floating-point point arrays
//! - [`RotatedRect`] - Minimum-area enclosing rectangle of a point set

pub mod box_;
pub mod error;
pub mod pix;
pub mod pta;

pub use box_::Box;
pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixelDepth, PixelOp, RgbComponent};
pub use pta::{Point, Pta, RotatedRect};

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Luma weights in percent (red, green, blue).
    pub const LUMA_WEIGHTS: (u32, u32, u32) = (30, 59, 11);

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Perceptual brightness `0.3 R + 0.59 G + 0.11 B`, truncated.
    ///
    /// Evaluated in integer percent so that a neutral grey maps to
    /// itself exactly.
    #[inline]
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        let (wr, wg, wb) = LUMA_WEIGHTS;
        ((wr * r as u32 + wg * g as u32 + wb * b as u32) / 100) as u8
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract_rgb() {
            let pixel = compose_rgb(12, 34, 56);
            assert_eq!(extract_rgb(pixel), (12, 34, 56));
            assert_eq!(pixel & 0xff, 255);
        }

        #[test]
        fn test_luma_gray_is_identity() {
            for v in [0u8, 1, 50, 127, 128, 200, 254, 255] {
                assert_eq!(luma(v, v, v), v);
            }
        }

        #[test]
        fn test_luma_weights() {
            assert_eq!(luma(255, 0, 0), 76);
            assert_eq!(luma(0, 255, 0), 150);
            assert_eq!(luma(0, 0, 255), 28);
            // 0.3*100 + 0.59*200 + 0.11*50 = 153.5
            assert_eq!(luma(100, 200, 50), 153);
        }
    }
}
