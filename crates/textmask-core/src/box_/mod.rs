//! Box - Rectangle regions
//!
//! Axis-aligned rectangles in pixel coordinates.

use crate::error::{Error, Result};
use crate::pta::Point;

/// A rectangle region
///
/// A small Copy type; `(x, y)` is the top-left pixel and `w`, `h` count
/// pixels, so a box covering a single pixel has `w == h == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={w}, h={h}"
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest box containing every point.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut xmin, mut ymin, mut xmax, mut ymax) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            xmin = xmin.min(p.x);
            ymin = ymin.min(p.y);
            xmax = xmax.max(p.x);
            ymax = ymax.max(p.y);
        }
        Some(Self {
            x: xmin,
            y: ymin,
            w: xmax - xmin + 1,
            h: ymax - ymin + 1,
        })
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Width over height, or `None` for a zero-height box.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.h == 0 {
            None
        } else {
            Some(self.w as f64 / self.h as f64)
        }
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Intersection with the `width x height` raster, if non-empty.
    pub fn clip(&self, width: u32, height: u32) -> Option<Self> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.right().min(width as i32);
        let y1 = self.bottom().min(height as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Self::new_unchecked(x0, y0, x1 - x0, y1 - y0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_new_rejects_negative() {
        assert!(Box::new(0, 0, -1, 2).is_err());
        assert!(Box::new(0, 0, 0, 0).is_ok());
    }

    #[test]
    fn test_from_points_inclusive_extent() {
        let pts = [Point::new(3, 4), Point::new(7, 2), Point::new(5, 9)];
        let b = Box::from_points(&pts).unwrap();
        assert_eq!(b, Box::new_unchecked(3, 2, 5, 8));
        assert_eq!(b.right(), 8);
        assert_eq!(b.bottom(), 10);
        assert_eq!(b.area(), 40);
    }

    #[test]
    fn test_from_points_single_and_empty() {
        let b = Box::from_points(&[Point::new(1, 1)]).unwrap();
        assert_eq!((b.w, b.h), (1, 1));
        assert!(Box::from_points(&[]).is_none());
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(Box::new_unchecked(0, 0, 10, 4).aspect_ratio(), Some(2.5));
        assert_eq!(Box::new_unchecked(0, 0, 10, 0).aspect_ratio(), None);
    }

    #[test]
    fn test_clip() {
        let b = Box::new_unchecked(-2, 3, 6, 10);
        assert_eq!(b.clip(10, 8), Some(Box::new_unchecked(0, 3, 4, 5)));
        assert_eq!(Box::new_unchecked(12, 0, 3, 3).clip(10, 8), None);
        assert!(b.contains_point(-2, 3));
        assert!(!b.contains_point(4, 3));
    }
}
