//! Border operations for images
//!
//! Adds or strips a uniform frame of pixels around an image. The text
//! mask pipeline pads its source before edge detection so contours never
//! touch the raster edge.

use super::{Pix, PixMut};
use crate::error::{Error, Result};

impl Pix {
    /// Add a uniform border around the image.
    ///
    /// Creates a new image with `npix` pixels of border on all sides,
    /// filled with the specified value. The original pixels are copied
    /// to offset `(npix, npix)`.
    ///
    /// # Arguments
    ///
    /// * `npix` - Border width in pixels (0 returns a copy)
    /// * `val` - Border pixel value
    ///
    /// # Errors
    ///
    /// Returns error if the padded dimensions overflow or `val` does not
    /// fit the image depth.
    pub fn add_border(&self, npix: u32, val: u32) -> Result<Pix> {
        if npix == 0 {
            return Ok(self.clone());
        }
        let grow = npix
            .checked_mul(2)
            .ok_or_else(|| Error::InvalidParameter(format!("border {npix} too large")))?;
        let w = self
            .width()
            .checked_add(grow)
            .ok_or_else(|| Error::InvalidParameter(format!("border {npix} too large")))?;
        let h = self
            .height()
            .checked_add(grow)
            .ok_or_else(|| Error::InvalidParameter(format!("border {npix} too large")))?;

        let mut out = PixMut::new(w, h, self.depth())?;
        out.set_all_arbitrary(val)?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.set_pixel_unchecked(x + npix, y + npix, self.get_pixel_unchecked(x, y));
            }
        }
        Ok(out.into())
    }

    /// Remove a uniform border from the image.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - 2*npix, height - 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns error if the border leaves no pixels.
    pub fn remove_border(&self, npix: u32) -> Result<Pix> {
        if npix == 0 {
            return Ok(self.clone());
        }
        let shrink = u64::from(npix) * 2;
        if shrink >= u64::from(self.width()) || shrink >= u64::from(self.height()) {
            return Err(Error::InvalidParameter(format!(
                "border {npix} too large for {}x{} image",
                self.width(),
                self.height()
            )));
        }
        let w = self.width() - 2 * npix;
        let h = self.height() - 2 * npix;
        let mut out = PixMut::new(w, h, self.depth())?;
        for y in 0..h {
            for x in 0..w {
                out.set_pixel_unchecked(x, y, self.get_pixel_unchecked(x + npix, y + npix));
            }
        }
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pix::PixelDepth;

    #[test]
    fn test_add_border_places_original() {
        let mut pm = PixMut::new(3, 2, PixelDepth::Bit8).unwrap();
        pm.set_pixel(2, 1, 90).unwrap();
        let pix: Pix = pm.into();

        let padded = pix.add_border(4, 17).unwrap();
        assert_eq!((padded.width(), padded.height()), (11, 10));
        assert_eq!(padded.get_pixel(0, 0), Some(17));
        assert_eq!(padded.get_pixel(10, 9), Some(17));
        assert_eq!(padded.get_pixel(4, 4), Some(0));
        assert_eq!(padded.get_pixel(6, 5), Some(90));
        assert_eq!(padded.get_pixel(7, 5), Some(17));
    }

    #[test]
    fn test_add_border_rgb() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        let padded = pix.add_border(1, 0xffff_ffff).unwrap();
        assert_eq!(padded.get_pixel(0, 3), Some(0xffff_ffff));
        assert_eq!(padded.get_pixel(1, 1), Some(0));
    }

    #[test]
    fn test_add_border_rejects_bad_value() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        assert!(pix.add_border(1, 300).is_err());
    }

    #[test]
    fn test_remove_border_inverts_add() {
        let mut pm = PixMut::new(5, 4, PixelDepth::Bit8).unwrap();
        pm.set_pixel(0, 0, 1).unwrap();
        pm.set_pixel(4, 3, 2).unwrap();
        let pix: Pix = pm.into();
        let back = pix.add_border(3, 200).unwrap().remove_border(3).unwrap();
        assert_eq!(back, pix);
        assert!(pix.remove_border(2).is_err());
    }
}
