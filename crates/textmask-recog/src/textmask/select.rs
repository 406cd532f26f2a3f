//! Choosing the final text regions

use super::descend::kept_descendant_counts;
use super::{RegionClassifier, TextMaskOptions};
use textmask_core::Box;
use textmask_region::{Contour, ContourTree};

/// A selected text region.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Contour index in the tree
    pub index: usize,
    /// The traced boundary, in edge map coordinates
    pub contour: Contour,
    /// Bounding box of the boundary, in edge map coordinates
    pub bbox: Box,
    /// Nearest ancestor that passed classification
    pub kept_ancestor: Option<usize>,
    /// Number of classified descendants
    pub descendants: usize,
}

/// Select text regions from a contour forest.
///
/// A contour is selected when it passes `classifier`, has at most
/// `options.max_descendants` classified descendants, and is not
/// shadowed: its nearest classified ancestor, if any, must itself have
/// more than `max_descendants` classified descendants.
///
/// # Returns
///
/// Selected regions in ascending contour index.
pub fn select_regions(
    tree: &ContourTree,
    classifier: &RegionClassifier,
    options: &TextMaskOptions,
) -> Vec<Region> {
    let keep = classifier.verdicts(tree);
    let counts = kept_descendant_counts(tree, &keep);
    let max = options.max_descendants;

    let mut regions = Vec::new();
    for (index, contour) in tree.contours().iter().enumerate() {
        let kept_ancestor = tree.ancestors(index).find(|&a| keep[a]);
        let descendants = counts[index];

        if !keep[index] {
            tracing::trace!(index, "contour rejected by shape or closure");
            continue;
        }
        if descendants > max {
            tracing::trace!(index, descendants, "contour rejected: too many nested regions");
            continue;
        }
        if kept_ancestor.is_some_and(|a| counts[a] <= max) {
            tracing::trace!(index, parent = ?kept_ancestor, "contour shadowed by ancestor");
            continue;
        }
        let Some(bbox) = contour.bounding_box() else {
            continue;
        };

        tracing::debug!(
            index,
            parent = ?kept_ancestor,
            descendants,
            x = bbox.x,
            y = bbox.y,
            w = bbox.w,
            h = bbox.h,
            "region selected"
        );
        regions.push(Region {
            index,
            contour: contour.clone(),
            bbox,
            kept_ancestor,
            descendants,
        });
    }
    regions
}
