//! Contours and the contour forest
//!
//! A [`ContourTree`] owns every traced [`Contour`] together with one
//! [`ContourNode`] per contour. Nodes are stored in an arena indexed by
//! contour index; relations are explicit `Option<usize>` links, so index
//! 0 is an ordinary contour and absence is never confused with it.

use crate::error::{RegionError, RegionResult};
use textmask_core::{Box, Point};

/// Whether a border encloses foreground or a hole inside foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// Outer border of a connected component
    Outer,
    /// Border of a hole inside a connected component
    Hole,
}

/// One traced boundary: the ordered pixels along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    /// Outer border or hole border
    pub kind: BorderKind,
    /// Border pixels in tracing order
    pub points: Vec<Point>,
}

impl Contour {
    /// Create a contour from its traced points.
    pub fn new(kind: BorderKind, points: Vec<Point>) -> Self {
        Self { kind, points }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounding box, `None` for an empty contour.
    pub fn bounding_box(&self) -> Option<Box> {
        Box::from_points(&self.points)
    }

    /// Whether the first and last points lie within `tolerance` of each
    /// other (Chebyshev distance). An empty contour is not closed.
    pub fn is_closed(&self, tolerance: u32) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.chebyshev(last) <= tolerance,
            _ => false,
        }
    }
}

/// Hierarchy relations of one contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContourNode {
    /// Immediately enclosing contour
    pub parent: Option<usize>,
    /// First contour directly inside this one
    pub first_child: Option<usize>,
    /// Next contour with the same parent
    pub next_sibling: Option<usize>,
    /// Previous contour with the same parent
    pub prev_sibling: Option<usize>,
}

/// Contours plus their nesting forest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContourTree {
    contours: Vec<Contour>,
    nodes: Vec<ContourNode>,
}

impl ContourTree {
    /// Build a forest from each contour's parent.
    ///
    /// Children of a node are linked as siblings in ascending index
    /// order; roots likewise.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if the lengths differ,
    /// a parent index is out of range, or the parent links form a cycle.
    pub fn from_parents(contours: Vec<Contour>, parents: &[Option<usize>]) -> RegionResult<Self> {
        let n = contours.len();
        if parents.len() != n {
            return Err(RegionError::InvalidParameters(format!(
                "{} parents given for {n} contours",
                parents.len()
            )));
        }
        if let Some((i, p)) = parents
            .iter()
            .enumerate()
            .find_map(|(i, p)| p.filter(|&p| p >= n).map(|p| (i, p)))
        {
            return Err(RegionError::InvalidParameters(format!(
                "contour {i} has parent {p} out of range"
            )));
        }

        let mut tree = ContourTree {
            contours,
            nodes: parents
                .iter()
                .map(|&parent| ContourNode {
                    parent,
                    ..ContourNode::default()
                })
                .collect(),
        };

        // Every walk up the parent chain must reach a root within n steps
        for start in 0..n {
            let mut steps = 0;
            let mut cur = tree.nodes[start].parent;
            while let Some(p) = cur {
                steps += 1;
                if steps > n {
                    return Err(RegionError::InvalidParameters(format!(
                        "parent links of contour {start} form a cycle"
                    )));
                }
                cur = tree.nodes[p].parent;
            }
        }

        let mut groups: Vec<Vec<usize>> = vec![Vec::new(); n + 1];
        for (i, p) in parents.iter().enumerate() {
            groups[p.unwrap_or(n)].push(i);
        }
        for (g, members) in groups.iter().enumerate() {
            let parent = (g < n).then_some(g);
            tree.link_siblings(parent, members);
        }
        Ok(tree)
    }

    /// Relink the children of `parent` (or the roots, for `None`) so that
    /// siblings appear in `order`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] unless `order` is a
    /// permutation of the current children.
    pub fn reorder_children(&mut self, parent: Option<usize>, order: &[usize]) -> RegionResult<()> {
        let mut current: Vec<usize> = match parent {
            Some(p) if p >= self.len() => {
                return Err(RegionError::InvalidParameters(format!(
                    "node {p} out of range"
                )));
            }
            Some(p) => self.children(p).collect(),
            None => self.roots().collect(),
        };
        let mut wanted = order.to_vec();
        current.sort_unstable();
        wanted.sort_unstable();
        if current != wanted {
            return Err(RegionError::InvalidParameters(format!(
                "{order:?} is not a permutation of the children of {parent:?}"
            )));
        }
        self.link_siblings(parent, order);
        Ok(())
    }

    fn link_siblings(&mut self, parent: Option<usize>, members: &[usize]) {
        if let Some(p) = parent {
            self.nodes[p].first_child = members.first().copied();
        }
        for (k, &i) in members.iter().enumerate() {
            let node = &mut self.nodes[i];
            node.prev_sibling = k.checked_sub(1).map(|j| members[j]);
            node.next_sibling = members.get(k + 1).copied();
        }
    }

    /// Number of contours.
    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    /// Whether the tree holds no contours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// All contours, by index.
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// All hierarchy nodes, by index.
    pub fn nodes(&self) -> &[ContourNode] {
        &self.nodes
    }

    /// Contour at `index`.
    pub fn contour(&self, index: usize) -> Option<&Contour> {
        self.contours.get(index)
    }

    /// Hierarchy node at `index`.
    pub fn node(&self, index: usize) -> Option<&ContourNode> {
        self.nodes.get(index)
    }

    /// Direct children of `index`, following the sibling chain from the
    /// first child.
    pub fn children(&self, index: usize) -> Siblings<'_> {
        let start = self.nodes.get(index).and_then(|n| n.first_child);
        Siblings {
            tree: self,
            next: start,
        }
    }

    /// Top-level contours.
    pub fn roots(&self) -> Siblings<'_> {
        let start = self.nodes.iter().position(|n| n.parent.is_none() && n.prev_sibling.is_none());
        Siblings {
            tree: self,
            next: start,
        }
    }

    /// Proper ancestors of `index`, nearest first.
    pub fn ancestors(&self, index: usize) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.nodes.get(index).and_then(|n| n.parent),
        }
    }
}

/// Iterator along a `next_sibling` chain.
pub struct Siblings<'a> {
    tree: &'a ContourTree,
    next: Option<usize>,
}

impl Iterator for Siblings<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let cur = self.next?;
        self.next = self.tree.nodes.get(cur).and_then(|n| n.next_sibling);
        Some(cur)
    }
}

/// Iterator along `parent` links.
pub struct Ancestors<'a> {
    tree: &'a ContourTree,
    next: Option<usize>,
}

impl Iterator for Ancestors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let cur = self.next?;
        self.next = self.tree.nodes.get(cur).and_then(|n| n.parent);
        Some(cur)
    }
}
