//! Counting accepted regions nested under a contour

use textmask_region::ContourTree;

/// Push every member of the sibling chain through `start`, scanning both
/// directions.
fn push_sibling_chain(tree: &ContourTree, start: usize, stack: &mut Vec<usize>) {
    let mut cur = Some(start);
    while let Some(i) = cur {
        stack.push(i);
        cur = tree.node(i).and_then(|n| n.next_sibling);
    }
    let mut cur = tree.node(start).and_then(|n| n.prev_sibling);
    while let Some(i) = cur {
        stack.push(i);
        cur = tree.node(i).and_then(|n| n.prev_sibling);
    }
}

/// Number of kept contours strictly below `node`.
///
/// Walks the first child, that child's whole sibling chain, and
/// recursively each of their children. `keep` is indexed by contour
/// index; contours past its end count as not kept. A node without
/// children counts 0, as does an index outside the tree.
pub fn count_kept_descendants(tree: &ContourTree, keep: &[bool], node: usize) -> usize {
    let mut stack = Vec::new();
    if let Some(first) = tree.node(node).and_then(|n| n.first_child) {
        push_sibling_chain(tree, first, &mut stack);
    }

    let mut count = 0;
    while let Some(i) = stack.pop() {
        if keep.get(i).copied().unwrap_or(false) {
            count += 1;
        }
        if let Some(first) = tree.node(i).and_then(|n| n.first_child) {
            push_sibling_chain(tree, first, &mut stack);
        }
    }
    count
}

/// [`count_kept_descendants`] for every contour, by contour index.
///
/// Computed in one pass: each contour adds itself (if kept) and its own
/// count to its parent, children before parents.
pub fn kept_descendant_counts(tree: &ContourTree, keep: &[bool]) -> Vec<usize> {
    let n = tree.len();

    // Preorder over the forest; reversed, every child precedes its parent
    let mut order = Vec::with_capacity(n);
    let mut stack: Vec<usize> = tree.roots().collect();
    while let Some(i) = stack.pop() {
        order.push(i);
        stack.extend(tree.children(i));
    }

    let mut counts = vec![0usize; n];
    for &i in order.iter().rev() {
        if let Some(p) = tree.node(i).and_then(|node| node.parent) {
            let own = usize::from(keep.get(i).copied().unwrap_or(false));
            counts[p] += own + counts[i];
        }
    }
    counts
}
