//! Gradient and edge detection
//!
//! - [`sobel_gradients`]: signed 3x3 Sobel derivatives of an 8 bpp image
//! - [`canny`]: thin binary edges from the L1 gradient magnitude, using
//!   non-maximum suppression and two-threshold hysteresis
//!
//! Thresholds are on the L1 Sobel scale, `|dx| + |dy|`, whose range for
//! 8 bpp input is `0..=2040`.

use crate::{FilterError, FilterResult};
use textmask_core::{Pix, PixMut, PixelDepth};

/// Fixed-point precision used for the sector tests.
const SECTOR_SHIFT: i32 = 15;
/// tan(22.5 deg) in `SECTOR_SHIFT` fixed point.
const TG22: i32 = 13573;

/// Hysteresis thresholds for [`canny`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannyOptions {
    /// Candidate pixels need a magnitude strictly above this value
    pub low: i32,
    /// Seed pixels need a magnitude strictly above this value
    pub high: i32,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            low: 200,
            high: 250,
        }
    }
}

impl CannyOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower hysteresis threshold
    pub fn with_low(mut self, low: i32) -> Self {
        self.low = low;
        self
    }

    /// Set the upper hysteresis threshold
    pub fn with_high(mut self, high: i32) -> Self {
        self.high = high;
        self
    }

    /// Check that the thresholds are usable.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if a threshold is
    /// negative or `low > high`.
    pub fn validate(&self) -> FilterResult<()> {
        if self.low < 0 || self.high < 0 {
            return Err(FilterError::InvalidParameters(format!(
                "canny thresholds must be non-negative: low={}, high={}",
                self.low, self.high
            )));
        }
        if self.low > self.high {
            return Err(FilterError::InvalidParameters(format!(
                "canny low threshold {} exceeds high threshold {}",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Signed horizontal and vertical derivatives, row-major.
#[derive(Debug, Clone)]
pub struct Gradient {
    pub width: u32,
    pub height: u32,
    pub dx: Vec<i32>,
    pub dy: Vec<i32>,
}

impl Gradient {
    /// L1 magnitude `|dx| + |dy|` per pixel.
    pub fn magnitude_l1(&self) -> Vec<i32> {
        self.dx
            .iter()
            .zip(&self.dy)
            .map(|(dx, dy)| dx.abs() + dy.abs())
            .collect()
    }
}

fn check_8bpp(pix: &Pix) -> FilterResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8-bpp grayscale",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Compute 3x3 Sobel derivatives.
///
/// Pixels beyond the image edge replicate the nearest edge pixel, so a
/// uniform image has zero gradient everywhere.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedDepth`] unless the image is 8 bpp.
pub fn sobel_gradients(pix: &Pix) -> FilterResult<Gradient> {
    check_8bpp(pix)?;
    let (w, h) = (pix.width(), pix.height());
    let (wi, hi) = (w as i32, h as i32);
    let at = |x: i32, y: i32| -> i32 {
        let xc = x.clamp(0, wi - 1) as u32;
        let yc = y.clamp(0, hi - 1) as u32;
        pix.get_pixel_unchecked(xc, yc) as i32
    };

    let n = (w as usize) * (h as usize);
    let mut dx = Vec::with_capacity(n);
    let mut dy = Vec::with_capacity(n);
    for y in 0..hi {
        for x in 0..wi {
            let gx = (at(x + 1, y - 1) + 2 * at(x + 1, y) + at(x + 1, y + 1))
                - (at(x - 1, y - 1) + 2 * at(x - 1, y) + at(x - 1, y + 1));
            let gy = (at(x - 1, y + 1) + 2 * at(x, y + 1) + at(x + 1, y + 1))
                - (at(x - 1, y - 1) + 2 * at(x, y - 1) + at(x + 1, y - 1));
            dx.push(gx);
            dy.push(gy);
        }
    }
    Ok(Gradient {
        width: w,
        height: h,
        dx,
        dy,
    })
}

/// Canny edge detection on an 8 bpp image.
///
/// # Arguments
///
/// * `pix` - Input 8-bit grayscale image
/// * `options` - Hysteresis thresholds
///
/// # Returns
///
/// A 1 bpp image of the same size with edge pixels set to 1.
///
/// # Errors
///
/// Returns an error for non-8 bpp input or invalid thresholds.
pub fn canny(pix: &Pix, options: &CannyOptions) -> FilterResult<Pix> {
    options.validate()?;
    let grad = sobel_gradients(pix)?;
    let mag = grad.magnitude_l1();
    let (wi, hi) = (grad.width as i32, grad.height as i32);
    let idx = |x: i32, y: i32| (y * wi + x) as usize;
    let mag_at = |x: i32, y: i32| -> i32 {
        if x < 0 || y < 0 || x >= wi || y >= hi {
            0
        } else {
            mag[idx(x, y)]
        }
    };

    // 0: not an edge, 1: weak candidate, 2: edge
    let mut state = vec![0u8; mag.len()];
    let mut stack: Vec<(i32, i32)> = Vec::new();

    for y in 0..hi {
        for x in 0..wi {
            let i = idx(x, y);
            let m = mag[i];
            if m <= options.low {
                continue;
            }

            let (gx, gy) = (grad.dx[i], grad.dy[i]);
            let ax = gx.abs();
            let ys = gy.abs() << SECTOR_SHIFT;
            let tg22x = ax * TG22;
            let is_max = if ys < tg22x {
                m > mag_at(x - 1, y) && m >= mag_at(x + 1, y)
            } else {
                let tg67x = tg22x + (ax << (SECTOR_SHIFT + 1));
                if ys > tg67x {
                    m > mag_at(x, y - 1) && m >= mag_at(x, y + 1)
                } else {
                    let s = if (gx ^ gy) < 0 { -1 } else { 1 };
                    m > mag_at(x - s, y - 1) && m > mag_at(x + s, y + 1)
                }
            };
            if !is_max {
                continue;
            }

            if m > options.high {
                state[i] = 2;
                stack.push((x, y));
            } else {
                state[i] = 1;
            }
        }
    }

    while let Some((x, y)) = stack.pop() {
        for ny in (y - 1)..=(y + 1) {
            for nx in (x - 1)..=(x + 1) {
                if nx < 0 || ny < 0 || nx >= wi || ny >= hi {
                    continue;
                }
                let j = idx(nx, ny);
                if state[j] == 1 {
                    state[j] = 2;
                    stack.push((nx, ny));
                }
            }
        }
    }

    let mut out = PixMut::new(grad.width, grad.height, PixelDepth::Bit1)?;
    for y in 0..hi {
        for x in 0..wi {
            if state[idx(x, y)] == 2 {
                out.set_pixel_unchecked(x as u32, y as u32, 1);
            }
        }
    }
    Ok(out.into())
}
