//! Per-contour accept/reject decision

use super::TextMaskOptions;
use textmask_core::Box;
use textmask_region::{Contour, ContourTree};

/// Accepts contours whose bounding box has a text-like shape and whose
/// ends meet.
///
/// The verdict depends only on the contour and the edge map size.
#[derive(Debug, Clone)]
pub struct RegionClassifier {
    min_aspect_ratio: f64,
    max_aspect_ratio: f64,
    min_area: i64,
    max_area: f64,
    closure_tolerance: u32,
}

impl RegionClassifier {
    /// Classifier for an edge map of `width x height` pixels.
    pub fn new(width: u32, height: u32, options: &TextMaskOptions) -> Self {
        let image_area = width as f64 * height as f64;
        Self {
            min_aspect_ratio: options.min_aspect_ratio,
            max_aspect_ratio: options.max_aspect_ratio,
            min_area: options.min_box_area,
            max_area: image_area * options.max_box_area_fraction,
            closure_tolerance: options.closure_tolerance,
        }
    }

    /// Whether a bounding box alone is plausible. Both area bounds and
    /// both ratio bounds are inclusive.
    pub fn accepts_box(&self, bbox: &Box) -> bool {
        let Some(ratio) = bbox.aspect_ratio() else {
            return false;
        };
        if ratio < self.min_aspect_ratio || ratio > self.max_aspect_ratio {
            return false;
        }
        let area = bbox.area();
        area >= self.min_area && area as f64 <= self.max_area
    }

    /// Whether `contour` is kept.
    pub fn keep(&self, contour: &Contour) -> bool {
        match contour.bounding_box() {
            Some(bbox) => self.accepts_box(&bbox) && contour.is_closed(self.closure_tolerance),
            None => false,
        }
    }

    /// One verdict per contour of `tree`, by contour index.
    pub fn verdicts(&self, tree: &ContourTree) -> Vec<bool> {
        tree.contours().iter().map(|c| self.keep(c)).collect()
    }
}
