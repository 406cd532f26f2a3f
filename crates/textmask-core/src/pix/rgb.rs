//! RGB component operations
//!
//! Functions for extracting individual color channels of 32 bpp images
//! and for reducing pixels to a perceptual brightness (luma).

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

/// Color component selector for RGB channel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbComponent {
    /// Red channel (bits 24-31)
    Red,
    /// Green channel (bits 16-23)
    Green,
    /// Blue channel (bits 8-15)
    Blue,
}

impl RgbComponent {
    /// The three color channels in storage order.
    pub const ALL: [RgbComponent; 3] = [RgbComponent::Red, RgbComponent::Green, RgbComponent::Blue];

    #[inline]
    fn extract(self, pixel: u32) -> u8 {
        match self {
            RgbComponent::Red => color::red(pixel),
            RgbComponent::Green => color::green(pixel),
            RgbComponent::Blue => color::blue(pixel),
        }
    }
}

impl Pix {
    /// Extract a single color component as an 8 bpp grayscale image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] unless the image is 32 bpp.
    pub fn get_rgb_component(&self, comp: RgbComponent) -> Result<Pix> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }

        let (w, h) = (self.width(), self.height());
        let mut out = PixMut::new(w, h, PixelDepth::Bit8)?;
        for y in 0..h {
            for x in 0..w {
                let val = comp.extract(self.get_pixel_unchecked(x, y));
                out.set_pixel_unchecked(x, y, val as u32);
            }
        }
        Ok(out.into())
    }

    /// Split the image into its 8 bpp intensity planes.
    ///
    /// A 32 bpp image yields red, green and blue planes in that order.
    /// An 8 bpp image is its own single plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for 1 bpp images.
    pub fn split_channels(&self) -> Result<Vec<Pix>> {
        match self.depth() {
            PixelDepth::Bit8 => Ok(vec![self.clone()]),
            PixelDepth::Bit32 => RgbComponent::ALL
                .iter()
                .map(|&comp| self.get_rgb_component(comp))
                .collect(),
            PixelDepth::Bit1 => Err(Error::UnsupportedDepth(1)),
        }
    }

    /// Convert to an 8 bpp luma image.
    ///
    /// 8 bpp images are returned unchanged (shared).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for 1 bpp images.
    pub fn convert_to_luma(&self) -> Result<Pix> {
        match self.depth() {
            PixelDepth::Bit8 => Ok(self.clone()),
            PixelDepth::Bit32 => {
                let (w, h) = (self.width(), self.height());
                let mut out = PixMut::new(w, h, PixelDepth::Bit8)?;
                for y in 0..h {
                    for x in 0..w {
                        let (r, g, b) = color::extract_rgb(self.get_pixel_unchecked(x, y));
                        out.set_pixel_unchecked(x, y, color::luma(r, g, b) as u32);
                    }
                }
                Ok(out.into())
            }
            PixelDepth::Bit1 => Err(Error::UnsupportedDepth(1)),
        }
    }

    /// Sample the luma at a possibly out-of-range point.
    ///
    /// Coordinates outside the image resolve to 0. For 8 bpp images the
    /// grey value is returned; a 1 bpp foreground pixel reads as 255.
    pub fn luma_at(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 {
            return 0;
        }
        let Some(pixel) = self.get_pixel(x as u32, y as u32) else {
            return 0;
        };
        match self.depth() {
            PixelDepth::Bit32 => {
                let (r, g, b) = color::extract_rgb(pixel);
                color::luma(r, g, b)
            }
            PixelDepth::Bit8 => pixel as u8,
            PixelDepth::Bit1 => {
                if pixel != 0 {
                    255
                } else {
                    0
                }
            }
        }
    }
}
