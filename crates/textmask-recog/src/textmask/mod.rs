//! Text region masking
//!
//! Separates text strokes from their local background inside roughly
//! axis-aligned crops such as license plates. The pipeline runs in
//! stages, each returning a new owned value:
//!
//! 1. **Edge map**: pad the source, run Canny on every color plane and
//!    OR the planes together ([`EdgeMap`]).
//! 2. **Contours**: trace every border of the edge map into a
//!    contour forest.
//! 3. **Classification**: accept contours with a plausible box shape
//!    that close on themselves ([`RegionClassifier`]).
//! 4. **Selection**: keep accepted contours with few accepted
//!    descendants, dropping the outer one when an inner one can stand
//!    alone ([`select_regions`]).
//! 5. **Estimation**: per region, a foreground level from the contour
//!    pixels and a background level from twelve samples just outside
//!    its box ([`estimate_thresholds`]).
//! 6. **Compositing**: paint each region's box into a 0/255 mask
//!    ([`composite_mask`]).
//!
//! [`text_binary`] runs all of it.

mod classify;
mod composite;
mod descend;
mod estimate;
mod select;

pub use classify::RegionClassifier;
pub use composite::composite_mask;
pub use descend::{count_kept_descendants, kept_descendant_counts};
pub use estimate::{ThresholdPair, background_sample_points, estimate_thresholds, median};
pub use select::{Region, select_regions};

use crate::{RecogError, RecogResult};
use textmask_core::{Pix, PixMut, PixelDepth};
use textmask_filter::{CannyOptions, canny};
use textmask_region::{ContourTree, find_contours};

/// Options for text masking
#[derive(Debug, Clone)]
pub struct TextMaskOptions {
    /// Width of the margin added on every side before edge detection
    /// (default: 50)
    pub border: u32,

    /// Pixel value of the margin (default: 0)
    pub border_value: u32,

    /// Canny low hysteresis threshold (default: 200)
    pub canny_low: i32,

    /// Canny high hysteresis threshold (default: 250)
    pub canny_high: i32,

    /// Smallest accepted box width / height (default: 0.1)
    pub min_aspect_ratio: f64,

    /// Largest accepted box width / height (default: 10.0)
    pub max_aspect_ratio: f64,

    /// Smallest accepted box area in pixels (default: 15)
    pub min_box_area: i64,

    /// Largest accepted box area as a fraction of the edge map area
    /// (default: 0.2)
    pub max_box_area_fraction: f64,

    /// Largest Chebyshev distance between the first and last contour
    /// points of a closed contour (default: 1)
    pub closure_tolerance: u32,

    /// Most accepted descendants a selected region may have (default: 2)
    pub max_descendants: usize,
}

impl Default for TextMaskOptions {
    fn default() -> Self {
        Self {
            border: 50,
            border_value: 0,
            canny_low: 200,
            canny_high: 250,
            min_aspect_ratio: 0.1,
            max_aspect_ratio: 10.0,
            min_box_area: 15,
            max_box_area_fraction: 0.2,
            closure_tolerance: 1,
            max_descendants: 2,
        }
    }
}

impl TextMaskOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the margin width
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Set the margin pixel value
    pub fn with_border_value(mut self, value: u32) -> Self {
        self.border_value = value;
        self
    }

    /// Set both Canny thresholds
    pub fn with_canny_thresholds(mut self, low: i32, high: i32) -> Self {
        self.canny_low = low;
        self.canny_high = high;
        self
    }

    /// Set the accepted aspect ratio range
    pub fn with_aspect_ratio_range(mut self, min: f64, max: f64) -> Self {
        self.min_aspect_ratio = min;
        self.max_aspect_ratio = max;
        self
    }

    /// Set the smallest accepted box area
    pub fn with_min_box_area(mut self, area: i64) -> Self {
        self.min_box_area = area;
        self
    }

    /// Set the largest accepted box area fraction
    pub fn with_max_box_area_fraction(mut self, fraction: f64) -> Self {
        self.max_box_area_fraction = fraction;
        self
    }

    /// Set the closure tolerance
    pub fn with_closure_tolerance(mut self, tolerance: u32) -> Self {
        self.closure_tolerance = tolerance;
        self
    }

    /// Set the descendant limit
    pub fn with_max_descendants(mut self, max: usize) -> Self {
        self.max_descendants = max;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if self.canny_low < 0 || self.canny_low > self.canny_high {
            return Err(RecogError::InvalidParameter(format!(
                "canny thresholds must satisfy 0 <= low <= high, got {} / {}",
                self.canny_low, self.canny_high
            )));
        }
        if !(self.min_aspect_ratio >= 0.0 && self.min_aspect_ratio <= self.max_aspect_ratio) {
            return Err(RecogError::InvalidParameter(format!(
                "aspect ratio range [{}, {}] is empty",
                self.min_aspect_ratio, self.max_aspect_ratio
            )));
        }
        if self.min_box_area < 0 {
            return Err(RecogError::InvalidParameter(
                "min_box_area must be non-negative".to_string(),
            ));
        }
        if !(self.max_box_area_fraction > 0.0) {
            return Err(RecogError::InvalidParameter(
                "max_box_area_fraction must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn canny_options(&self) -> CannyOptions {
        CannyOptions::new()
            .with_low(self.canny_low)
            .with_high(self.canny_high)
    }
}

/// The padded source and its binary edge map.
#[derive(Debug, Clone)]
pub struct EdgeMap {
    /// Source with the margin added
    pub padded: Pix,
    /// 1 bpp union of the per-plane Canny edges, same size as `padded`
    pub edges: Pix,
    /// Margin width
    pub border: u32,
}

impl EdgeMap {
    /// Pad the source and detect edges on every plane.
    ///
    /// # Arguments
    ///
    /// * `pix` - 8 bpp grayscale or 32 bpp RGB source
    /// * `options` - Margin and Canny thresholds
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::UnsupportedDepth`] for 1 bpp input, or an
    /// error for invalid options.
    pub fn build(pix: &Pix, options: &TextMaskOptions) -> RecogResult<Self> {
        options.validate()?;
        if pix.depth() == PixelDepth::Bit1 {
            return Err(RecogError::UnsupportedDepth {
                expected: "8 or 32 bpp",
                actual: 1,
            });
        }

        let padded = pix.add_border(options.border, options.border_value)?;
        let canny_opts = options.canny_options();
        let mut edges = PixMut::new(padded.width(), padded.height(), PixelDepth::Bit1)?;
        for plane in padded.split_channels()? {
            edges.or_inplace(&canny(&plane, &canny_opts)?)?;
        }

        Ok(Self {
            padded,
            edges: edges.into(),
            border: options.border,
        })
    }

    /// Area of the edge map in pixels.
    pub fn area(&self) -> i64 {
        self.edges.width() as i64 * self.edges.height() as i64
    }

    /// Trace every border in the edge map.
    pub fn trace(&self) -> RecogResult<ContourTree> {
        Ok(find_contours(&self.edges)?)
    }
}

/// Output of a full masking run.
#[derive(Debug, Clone)]
pub struct TextMask {
    /// 8 bpp mask of the padded size, containing only 0 and 255
    pub mask: Pix,
    /// Selected regions in ascending contour index, each with its
    /// estimate; `None` marks a region that was skipped
    pub regions: Vec<(Region, Option<ThresholdPair>)>,
    /// Margin width; subtract from region coordinates to get source
    /// coordinates
    pub border: u32,
}

impl TextMask {
    /// The mask with the margin removed, the size of the source.
    pub fn unpadded(&self) -> RecogResult<Pix> {
        Ok(self.mask.remove_border(self.border)?)
    }

    /// Regions that were painted, with their estimates.
    pub fn painted(&self) -> impl Iterator<Item = (&Region, &ThresholdPair)> {
        self.regions
            .iter()
            .filter_map(|(region, t)| t.as_ref().map(|t| (region, t)))
    }
}

/// Build a text mask for a source image.
///
/// # Arguments
///
/// * `pix` - 8 bpp grayscale or 32 bpp RGB source
/// * `options` - Pipeline options
///
/// # Returns
///
/// The mask, the selected regions and their estimates. The mask has the
/// size of the padded source.
pub fn text_binary(pix: &Pix, options: &TextMaskOptions) -> RecogResult<TextMask> {
    let edge_map = EdgeMap::build(pix, options)?;
    let tree = edge_map.trace()?;
    let classifier =
        RegionClassifier::new(edge_map.edges.width(), edge_map.edges.height(), options);
    let regions: Vec<(Region, Option<ThresholdPair>)> =
        select_regions(&tree, &classifier, options)
            .into_iter()
            .map(|region| {
                let t = estimate_thresholds(pix, &region, edge_map.border);
                (region, t)
            })
            .collect();
    let mask = composite_mask(&edge_map.padded, &regions)?;

    tracing::debug!(
        contours = tree.len(),
        selected = regions.len(),
        painted = regions.iter().filter(|(_, t)| t.is_some()).count(),
        "text mask built"
    );

    Ok(TextMask {
        mask,
        regions,
        border: edge_map.border,
    })
}

/// Build a text mask and return only the mask.
///
/// See [`text_binary`].
pub fn text_binary_mask(pix: &Pix, options: &TextMaskOptions) -> RecogResult<Pix> {
    Ok(text_binary(pix, options)?.mask)
}
