//! PIX - The raster container
//!
//! The `Pix` structure is the image type passed between every stage of
//! the pipeline. Three depths are supported: 1 bpp (edge maps, binary
//! masks), 8 bpp (grey planes, output masks) and 32 bpp (RGB sources).
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//! - For 32-bit images, color order is RGBA (red in MSB)
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod border;
pub mod graphics;
mod rgb;
mod rop;

pub use access::*;
pub use graphics::{PixelOp, generate_line_pta, generate_polyline_pta};
pub use rgb::RgbComponent;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel depth (bits per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 1-bit binary image
    Bit1 = 1,
    /// 8-bit grayscale
    Bit8 = 8,
    /// 32-bit RGB
    Bit32 = 32,
}

impl PixelDepth {
    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum pixel value representable at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Bit32 => u32::MAX,
            _ => (1u32 << self.bits()) - 1,
        }
    }
}

/// Internal PIX data
#[derive(Debug, PartialEq, Eq)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Depth in bits per pixel
    depth: PixelDepth,
    /// Samples per pixel (1 for binary/grayscale, 3 for RGB)
    spp: u32,
    /// 32-bit words per line
    wpl: u32,
    /// The image data (packed 32-bit words)
    data: Vec<u32>,
}

impl PixData {
    fn zeroed(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let wpl = compute_wpl(width, depth)?;
        let data_size = (wpl as usize) * (height as usize);

        let spp = match depth {
            PixelDepth::Bit32 => 3,
            _ => 1,
        };

        Ok(PixData {
            width,
            height,
            depth,
            spp,
            wpl,
            data: vec![0u32; data_size],
        })
    }
}

/// Compute words per line for given width and depth.
///
/// Uses u64 arithmetic to prevent overflow for large widths.
fn compute_wpl(width: u32, depth: PixelDepth) -> Result<u32> {
    let bits_per_line = u64::from(width) * u64::from(depth.bits());
    u32::try_from(bits_per_line.div_ceil(32)).map_err(|_| Error::InvalidParameter(format!(
        "image row too large: width={width} depth={depth:?}"
    )))
}

/// PIX - Raster container
///
/// # Examples
///
/// ```
/// use textmask_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(640, 480, PixelDepth::Bit8).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions and depth.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::zeroed(width, height, depth)?),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the words of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &self.inner.data[start..end]
    }

    /// Check whether `other` has the same width, height and depth.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.depth() == other.depth()
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    pub fn to_mut(&self) -> PixMut {
        let inner = PixData {
            width: self.inner.width,
            height: self.inner.height,
            depth: self.inner.depth,
            spp: self.inner.spp,
            wpl: self.inner.wpl,
            data: self.inner.data.clone(),
        };

        PixMut { inner }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create a new zeroed mutable image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        Ok(PixMut {
            inner: PixData::zeroed(width, height, depth)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &mut self.inner.data[start..end]
    }

    /// Set every pixel to `val`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `val` exceeds the maximum
    /// value for the image depth.
    pub fn set_all_arbitrary(&mut self, val: u32) -> Result<()> {
        let depth = self.depth();
        if val > depth.max_value() {
            return Err(Error::InvalidParameter(format!(
                "value {val} exceeds max {} for {} bpp",
                depth.max_value(),
                depth.bits()
            )));
        }
        let word = match depth {
            PixelDepth::Bit1 => {
                if val == 0 {
                    0
                } else {
                    0xFFFF_FFFF
                }
            }
            PixelDepth::Bit8 => val * 0x0101_0101,
            PixelDepth::Bit32 => val,
        };
        self.inner.data.fill(word);
        if depth == PixelDepth::Bit1 {
            self.clear_pad_bits();
        }
        Ok(())
    }

    /// Zero the unused bits past the image width in each row.
    ///
    /// Word-level binary operations rely on the pad bits being clear.
    pub fn clear_pad_bits(&mut self) {
        let used_bits = (self.width() * self.depth().bits()) % 32;
        if used_bits == 0 {
            return;
        }
        let mask = !0u32 << (32 - used_bits);
        let wpl = self.wpl() as usize;
        for row in self.inner.data.chunks_exact_mut(wpl) {
            row[wpl - 1] &= mask;
        }
    }

    /// Clear all pixels to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            Pix::new(0, 10, PixelDepth::Bit8),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(PixMut::new(10, 0, PixelDepth::Bit1).is_err());
    }

    #[test]
    fn test_wpl_per_depth() {
        assert_eq!(Pix::new(33, 1, PixelDepth::Bit1).unwrap().wpl(), 2);
        assert_eq!(Pix::new(5, 1, PixelDepth::Bit8).unwrap().wpl(), 2);
        assert_eq!(Pix::new(5, 1, PixelDepth::Bit32).unwrap().wpl(), 5);
    }

    #[test]
    fn test_spp() {
        assert_eq!(Pix::new(4, 4, PixelDepth::Bit32).unwrap().spp(), 3);
        assert_eq!(Pix::new(4, 4, PixelDepth::Bit8).unwrap().spp(), 1);
    }

    #[test]
    fn test_try_into_mut_shared() {
        let pix = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        let shared = pix.clone();
        let pix = pix.try_into_mut().unwrap_err();
        drop(shared);
        assert!(pix.try_into_mut().is_ok());
    }

    #[test]
    fn test_set_all_arbitrary() {
        let mut pm = PixMut::new(7, 3, PixelDepth::Bit8).unwrap();
        pm.set_all_arbitrary(255).unwrap();
        for y in 0..3 {
            for x in 0..7 {
                assert_eq!(pm.get_pixel(x, y), Some(255));
            }
        }
        assert!(pm.set_all_arbitrary(256).is_err());
    }

    #[test]
    fn test_set_all_binary_clears_pad_bits() {
        let mut pm = PixMut::new(10, 2, PixelDepth::Bit1).unwrap();
        pm.set_all_arbitrary(1).unwrap();
        assert_eq!(pm.data()[0], 0xFFC0_0000);
        assert_eq!(pm.data()[1], 0xFFC0_0000);
    }

    #[test]
    fn test_equality_compares_pixels() {
        let a = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        let b = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        assert_eq!(a, b);
        let mut pm = b.to_mut();
        pm.set_pixel(1, 1, 9).unwrap();
        let b: Pix = pm.into();
        assert_ne!(a, b);
    }
}
