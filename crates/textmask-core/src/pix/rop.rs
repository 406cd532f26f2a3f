//! Raster operations (ROP)
//!
//! Bitwise combination of two images of equal size and depth.

use super::{Pix, PixMut};
use crate::error::{Error, Result};

impl PixMut {
    /// Bitwise OR with another image, in-place.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn or_inplace(&mut self, other: &Pix) -> Result<()> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        if self.depth() != other.depth() {
            return Err(Error::InvalidDepth(other.depth().bits()));
        }
        for (dst, &src) in self.data_mut().iter_mut().zip(other.data()) {
            *dst |= src;
        }
        Ok(())
    }
}

impl Pix {
    /// Bitwise OR of two images.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn or(&self, other: &Pix) -> Result<Pix> {
        let mut out = self.to_mut();
        out.or_inplace(other)?;
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pix::PixelDepth;

    fn make_binary(w: u32, h: u32, pixels: &[(u32, u32)]) -> Pix {
        let mut pm = PixMut::new(w, h, PixelDepth::Bit1).unwrap();
        for &(x, y) in pixels {
            pm.set_pixel(x, y, 1).unwrap();
        }
        pm.into()
    }

    #[test]
    fn test_or_union() {
        let a = make_binary(40, 3, &[(0, 0), (35, 2)]);
        let b = make_binary(40, 3, &[(1, 1), (35, 2)]);
        let c = a.or(&b).unwrap();
        assert_eq!(c.get_pixel(0, 0), Some(1));
        assert_eq!(c.get_pixel(1, 1), Some(1));
        assert_eq!(c.get_pixel(35, 2), Some(1));
        assert_eq!(c.get_pixel(2, 2), Some(0));
    }

    #[test]
    fn test_or_mismatch() {
        let a = Pix::new(4, 4, PixelDepth::Bit1).unwrap();
        let b = Pix::new(5, 4, PixelDepth::Bit1).unwrap();
        let g = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        assert!(matches!(a.or(&b), Err(Error::DimensionMismatch { .. })));
        assert!(matches!(a.or(&g), Err(Error::InvalidDepth(8))));
    }
}
