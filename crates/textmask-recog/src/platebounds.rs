//! Plate bounds estimation
//!
//! A coarse oriented box around the dark content of a plate crop:
//!
//! 1. Convert to luma and binarize with Otsu's threshold, dark pixels
//!    as foreground.
//! 2. Erode with a small brick to drop thin noise. Pixels outside the
//!    crop count as foreground, so content touching the crop edge keeps
//!    its extent there.
//! 3. Fit the minimum-area rotated rectangle to the surviving pixels and
//!    draw it onto the eroded image.

use crate::{RecogError, RecogResult};
use textmask_color::threshold_otsu_inverted;
use textmask_core::{Pix, PixelDepth, PixelOp, Pta, RotatedRect};
use textmask_morph::erode_brick;

/// Options for plate bounds estimation
#[derive(Debug, Clone)]
pub struct PlateBoundsOptions {
    /// Width of the erosion brick (default: 5)
    pub erode_width: u32,

    /// Height of the erosion brick (default: 3)
    pub erode_height: u32,
}

impl Default for PlateBoundsOptions {
    fn default() -> Self {
        Self {
            erode_width: 5,
            erode_height: 3,
        }
    }
}

impl PlateBoundsOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the erosion brick size
    pub fn with_erode_size(mut self, width: u32, height: u32) -> Self {
        self.erode_width = width;
        self.erode_height = height;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if self.erode_width == 0 || self.erode_height == 0 {
            return Err(RecogError::InvalidParameter(
                "erosion brick must be at least 1x1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of plate bounds estimation
#[derive(Debug, Clone)]
pub struct PlateBounds {
    /// Minimum-area rectangle around the eroded foreground, `None` when
    /// nothing survives erosion
    pub rect: Option<RotatedRect>,

    /// Otsu threshold used for binarization
    pub threshold: u8,

    /// Eroded 1 bpp image with the rectangle drawn on it
    pub image: Pix,
}

/// Estimate the bounds of a plate.
///
/// # Arguments
///
/// * `pix` - 8 bpp grayscale or 32 bpp RGB image
/// * `options` - Erosion brick size
///
/// # Errors
///
/// Returns [`RecogError::UnsupportedDepth`] for 1 bpp input.
pub fn plate_bounds(pix: &Pix, options: &PlateBoundsOptions) -> RecogResult<PlateBounds> {
    options.validate()?;
    if pix.depth() == PixelDepth::Bit1 {
        return Err(RecogError::UnsupportedDepth {
            expected: "8 or 32 bpp",
            actual: 1,
        });
    }

    let gray = pix.convert_to_luma()?;
    let (threshold, binary) = threshold_otsu_inverted(&gray)?;
    let eroded = erode_brick(&binary, options.erode_width, options.erode_height)?;

    let mut points = Pta::new();
    for y in 0..eroded.height() {
        for x in 0..eroded.width() {
            if eroded.get_pixel_unchecked(x, y) != 0 {
                points.push(x as f32, y as f32);
            }
        }
    }
    let rect = points.min_area_rect();

    let mut image = eroded.to_mut();
    if let Some(r) = &rect {
        image.render_polyline(&r.vertices(), true, PixelOp::Set)?;
    }

    tracing::debug!(
        threshold,
        points = points.len(),
        found = rect.is_some(),
        "plate bounds estimated"
    );

    Ok(PlateBounds {
        rect,
        threshold,
        image: image.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use textmask_core::PixMut;

    fn create_plate(w: u32, h: u32, bg: u32, fg: u32, rect: (u32, u32, u32, u32)) -> Pix {
        let mut pm = PixMut::new(w, h, PixelDepth::Bit8).unwrap();
        pm.set_all_arbitrary(bg).unwrap();
        let (x0, y0, rw, rh) = rect;
        for y in y0..y0 + rh {
            for x in x0..x0 + rw {
                pm.set_pixel(x, y, fg).unwrap();
            }
        }
        pm.into()
    }

    #[test]
    fn test_dark_block() {
        let pix = create_plate(40, 30, 230, 20, (10, 10, 20, 10));
        let out = plate_bounds(&pix, &PlateBoundsOptions::default()).unwrap();
        assert_eq!(out.threshold, 20);

        // The 20x10 block erodes to 16x8 pixels at (12, 11)
        let rect = out.rect.unwrap();
        assert!((rect.area() - 15.0 * 7.0).abs() < 1e-3);
        assert!((rect.cx - 19.5).abs() < 1e-3);
        assert!((rect.cy - 14.5).abs() < 1e-3);

        assert_eq!(out.image.depth(), PixelDepth::Bit1);
        assert_eq!(out.image.get_pixel(12, 11), Some(1));
        assert_eq!(out.image.get_pixel(27, 18), Some(1));
        assert_eq!(out.image.get_pixel(11, 11), Some(0));
        assert_eq!(out.image.get_pixel(12, 10), Some(0));
    }

    #[test]
    fn test_block_touching_edge_keeps_extent() {
        // Dark block over x 0..20, y 5..15
        let pix = create_plate(40, 20, 230, 20, (0, 5, 20, 10));
        let out = plate_bounds(&pix, &PlateBoundsOptions::default()).unwrap();

        // Erodes to x 0..=17, y 6..=13: only the inner side shrinks
        let rect = out.rect.unwrap();
        assert!((rect.area() - 17.0 * 7.0).abs() < 1e-3);
        assert!((rect.cx - 8.5).abs() < 1e-3);
        assert!((rect.cy - 9.5).abs() < 1e-3);
        let min_x = rect
            .vertices()
            .iter()
            .map(|(x, _)| x)
            .fold(f32::INFINITY, f32::min);
        assert!(min_x.abs() < 1e-3);

        assert_eq!(out.image.get_pixel(1, 10), Some(1));
        assert_eq!(out.image.get_pixel(18, 10), Some(0));
    }

    #[test]
    fn test_blank_has_no_rect() {
        let pix = create_plate(20, 20, 230, 230, (0, 0, 0, 0));
        let out = plate_bounds(&pix, &PlateBoundsOptions::default()).unwrap();
        assert!(out.rect.is_none());
        assert!(out.image.data().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_thin_noise_is_eroded_away() {
        // A two-pixel-high bar does not survive a 3-high brick
        let pix = create_plate(30, 20, 230, 20, (5, 8, 20, 2));
        let out = plate_bounds(&pix, &PlateBoundsOptions::default()).unwrap();
        assert!(out.rect.is_none());

        let out = plate_bounds(&pix, &PlateBoundsOptions::new().with_erode_size(5, 1)).unwrap();
        assert!(out.rect.is_some());
    }

    #[test]
    fn test_invalid_options() {
        let pix = create_plate(10, 10, 230, 20, (2, 2, 5, 5));
        assert!(plate_bounds(&pix, &PlateBoundsOptions::new().with_erode_size(0, 3)).is_err());
        let binary = Pix::new(10, 10, PixelDepth::Bit1).unwrap();
        assert!(matches!(
            plate_bounds(&binary, &PlateBoundsOptions::default()),
            Err(RecogError::UnsupportedDepth { actual: 1, .. })
        ));
    }
}
