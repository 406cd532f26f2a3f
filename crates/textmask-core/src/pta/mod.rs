//! Point, Pta - Points and point arrays
//!
//! [`Point`] is an integer pixel coordinate, used for traced contours.
//! [`Pta`] is an array of floating-point coordinate pairs, used for
//! geometric operations and rendering.
//!
//! # Storage layout
//!
//! `Pta` stores points as separate X and Y vectors (SoA layout).

mod hull;

pub use hull::RotatedRect;

/// An integer pixel coordinate.
///
/// Coordinates may be negative or lie outside an image; sampling
/// functions decide how to resolve them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (chessboard) distance to `other`.
    #[inline]
    pub fn chebyshev(&self, other: &Point) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Array of points.
///
/// Stores 2D points as parallel x/y coordinate vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pta {
    /// X coordinates
    x: Vec<f32>,
    /// Y coordinates
    y: Vec<f32>,
}

impl Pta {
    /// Create a new empty Pta.
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Create a Pta with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<(f32, f32)> {
        Some((*self.x.get(index)?, *self.y.get(index)?))
    }

    /// Add a point.
    pub fn push(&mut self, x: f32, y: f32) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Create an iterator over points.
    pub fn iter(&self) -> PtaIter<'_> {
        PtaIter {
            pta: self,
            index: 0,
        }
    }
}

/// Iterator over Pta points.
pub struct PtaIter<'a> {
    pta: &'a Pta,
    index: usize,
}

impl Iterator for PtaIter<'_> {
    type Item = (f32, f32);

    fn next(&mut self) -> Option<Self::Item> {
        let pt = self.pta.get(self.index)?;
        self.index += 1;
        Some(pt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pta.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PtaIter<'_> {}

impl<'a> IntoIterator for &'a Pta {
    type Item = (f32, f32);
    type IntoIter = PtaIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(f32, f32)> for Pta {
    fn from_iter<T: IntoIterator<Item = (f32, f32)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut pta = Self::with_capacity(iter.size_hint().0);
        for (x, y) in iter {
            pta.push(x, y);
        }
        pta
    }
}

impl FromIterator<Point> for Pta {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        iter.into_iter().map(|p| (p.x as f32, p.y as f32)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_chebyshev() {
        let a = Point::new(2, 5);
        assert_eq!(a.chebyshev(&a), 0);
        assert_eq!(a.chebyshev(&Point::new(3, 4)), 1);
        assert_eq!(a.chebyshev(&Point::new(-1, 5)), 3);
        assert_eq!(a.offset(-2, 1), Point::new(0, 6));
    }

    #[test]
    fn test_pta_push_get_iter() {
        let mut pta = Pta::new();
        assert!(pta.is_empty());
        pta.push(1.0, 2.0);
        pta.push(3.5, -4.0);
        assert_eq!(pta.len(), 2);
        assert_eq!(pta.get(1), Some((3.5, -4.0)));
        assert_eq!(pta.get(2), None);
        let pts: Vec<_> = pta.iter().collect();
        assert_eq!(pts, vec![(1.0, 2.0), (3.5, -4.0)]);
    }

    #[test]
    fn test_pta_from_points() {
        let pta: Pta = [Point::new(1, 2), Point::new(-3, 4)].into_iter().collect();
        assert_eq!(pta.len(), 2);
        assert_eq!(pta.get(1), Some((-3.0, 4.0)));
    }
}
