//! Foreground and background levels of a region

use super::Region;
use textmask_core::{Box, Pix, Point};

/// Median of `values`, averaging the two middle values for an even
/// count. `values` is reordered. Returns `None` when empty.
pub fn median(values: &mut [u8]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    let (_, &mut upper, _) = values.select_nth_unstable(n / 2);
    if n % 2 == 1 {
        return Some(upper as f64);
    }
    // After selection everything left of n/2 is <= upper
    let lower = values[..n / 2].iter().copied().max().unwrap_or(upper);
    Some((lower as f64 + upper as f64) / 2.0)
}

/// The twelve points sampled around a box for its background level:
/// three just outside each corner.
pub fn background_sample_points(bbox: &Box) -> [Point; 12] {
    let (x, y, w, h) = (bbox.x, bbox.y, bbox.w, bbox.h);
    [
        // top-left
        Point::new(x - 1, y - 1),
        Point::new(x - 1, y),
        Point::new(x, y - 1),
        // top-right
        Point::new(x + w + 1, y - 1),
        Point::new(x + w + 1, y),
        Point::new(x + w, y - 1),
        // bottom-left
        Point::new(x - 1, y + h + 1),
        Point::new(x - 1, y + h),
        Point::new(x, y + h + 1),
        // bottom-right
        Point::new(x + w + 1, y + h + 1),
        Point::new(x + w, y + h + 1),
        Point::new(x + w + 1, y + h),
    ]
}

/// Intensity levels and paint colors for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPair {
    /// Mean luma along the region's contour
    pub foreground: f64,
    /// Median luma around the region's box
    pub background: f64,
    /// Color painted where the luma is at or below `foreground`
    pub fg_color: u8,
    /// Color painted where the luma is above `foreground`
    pub bg_color: u8,
}

impl ThresholdPair {
    /// Pick colors from the two levels: a contour at least as bright as
    /// its surroundings paints 255 on 0, otherwise 0 on 255.
    pub fn from_levels(foreground: f64, background: f64) -> Self {
        let (fg_color, bg_color) = if foreground >= background {
            (255, 0)
        } else {
            (0, 255)
        };
        Self {
            foreground,
            background,
            fg_color,
            bg_color,
        }
    }

    /// Color for a pixel of luma `value`.
    #[inline]
    pub fn paint(&self, value: u8) -> u8 {
        if value as f64 > self.foreground {
            self.bg_color
        } else {
            self.fg_color
        }
    }
}

/// Estimate the levels of `region` from the unpadded `source`.
///
/// Region coordinates are in the padded frame; `border` is subtracted
/// before sampling. Samples outside `source` read as 0.
///
/// Returns `None` for a region with an empty contour.
pub fn estimate_thresholds(source: &Pix, region: &Region, border: u32) -> Option<ThresholdPair> {
    let points = &region.contour.points;
    if points.is_empty() {
        return None;
    }
    let off = -(border as i32);
    let sample = |p: &Point| {
        let q = p.offset(off, off);
        source.luma_at(q.x, q.y)
    };

    let sum: u64 = points.iter().map(|p| sample(p) as u64).sum();
    let foreground = sum as f64 / points.len() as f64;

    let mut around = background_sample_points(&region.bbox).map(|p| sample(&p));
    let background = median(&mut around)?;

    Some(ThresholdPair::from_levels(foreground, background))
}

#[cfg(test)]
mod tests {
    use super::*;
    use textmask_core::{PixMut, PixelDepth};
    use textmask_region::{BorderKind, Contour};

    #[test]
    fn test_median_even_count_averages() {
        let mut v = [10, 10, 10, 10, 10, 10, 200, 200, 200, 200, 200, 200];
        assert_eq!(median(&mut v), Some(105.0));

        let mut shuffled = [200, 10, 200, 10, 10, 200, 10, 200, 200, 10, 10, 200];
        assert_eq!(median(&mut shuffled), Some(105.0));
    }

    #[test]
    fn test_median_odd_and_empty() {
        assert_eq!(median(&mut [7, 1, 3]), Some(3.0));
        assert_eq!(median(&mut [42]), Some(42.0));
        assert_eq!(median(&mut [1, 2]), Some(1.5));
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn test_sample_points_surround_box() {
        let bbox = Box::new_unchecked(10, 20, 5, 4);
        let pts = background_sample_points(&bbox);
        assert_eq!(pts.len(), 12);
        for p in pts {
            assert!(!bbox.contains_point(p.x, p.y), "{p:?} inside box");
        }
        assert_eq!(pts[0], Point::new(9, 19));
        assert_eq!(pts[9], Point::new(16, 25));
    }

    #[test]
    fn test_polarity() {
        let bright = ThresholdPair::from_levels(200.0, 50.0);
        assert_eq!((bright.fg_color, bright.bg_color), (255, 0));
        assert_eq!(bright.paint(250), 0);
        assert_eq!(bright.paint(200), 255);

        let dark = ThresholdPair::from_levels(50.0, 200.0);
        assert_eq!((dark.fg_color, dark.bg_color), (0, 255));
        assert_eq!(dark.paint(60), 255);
        assert_eq!(dark.paint(50), 0);
    }

    fn region_from_points(points: Vec<Point>) -> Region {
        let contour = Contour::new(BorderKind::Outer, points);
        let bbox = contour.bounding_box().unwrap_or_default();
        Region {
            index: 0,
            contour,
            bbox,
            kept_ancestor: None,
            descendants: 0,
        }
    }

    #[test]
    fn test_estimate_dark_stroke_on_light() {
        // 20x20 grey 220 with a dark 4x4 block at (8, 8)
        let mut pm = PixMut::new(20, 20, PixelDepth::Bit8).unwrap();
        pm.set_all_arbitrary(220).unwrap();
        for y in 8..12 {
            for x in 8..12 {
                pm.set_pixel(x, y, 30).unwrap();
            }
        }
        let pix: Pix = pm.into();

        // Block border in a frame padded by 5
        let pts: Vec<Point> = [(8, 8), (8, 11), (11, 11), (11, 8)]
            .iter()
            .map(|&(x, y)| Point::new(x + 5, y + 5))
            .collect();
        let t = estimate_thresholds(&pix, &region_from_points(pts), 5).unwrap();
        assert_eq!(t.foreground, 30.0);
        assert_eq!(t.background, 220.0);
        assert_eq!((t.fg_color, t.bg_color), (0, 255));
    }

    #[test]
    fn test_estimate_out_of_bounds_reads_zero() {
        let mut pm = PixMut::new(4, 4, PixelDepth::Bit8).unwrap();
        pm.set_all_arbitrary(100).unwrap();
        let pix: Pix = pm.into();
        // Whole region lies left of the source
        let pts = vec![Point::new(-10, 1), Point::new(-8, 3)];
        let t = estimate_thresholds(&pix, &region_from_points(pts), 0).unwrap();
        assert_eq!(t.foreground, 0.0);
        assert_eq!(t.background, 0.0);
        assert_eq!((t.fg_color, t.bg_color), (255, 0));
    }

    #[test]
    fn test_empty_contour_is_skipped() {
        let pix = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        assert!(estimate_thresholds(&pix, &region_from_points(Vec::new()), 0).is_none());
    }
}
