//! Contour tracing regression test
//!
//! Traces borders of synthetic shapes and checks the contour forest:
//! counts, border kinds, nesting, and that every border is closed.

use textmask_core::{Pix, PixMut, PixelDepth};
use textmask_region::{BorderKind, ContourTree, find_contours};
use textmask_test::RegParams;

fn fill_rect(pm: &mut PixMut, x0: u32, y0: u32, w: u32, h: u32, val: u32) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            pm.set_pixel(x, y, val).unwrap();
        }
    }
}

/// 60x40 image with:
/// - a 6x6 solid square at (2,2)
/// - a ring at (15,2): 12x12 outer, 6x6 hole, with a 2x2 dot in the hole
/// - a 1-pixel line from (2,20) to (20,20)
/// - an isolated pixel at (40,30)
fn create_test_shapes() -> Pix {
    let mut pm = PixMut::new(60, 40, PixelDepth::Bit1).unwrap();
    fill_rect(&mut pm, 2, 2, 6, 6, 1);
    fill_rect(&mut pm, 15, 2, 12, 12, 1);
    fill_rect(&mut pm, 18, 5, 6, 6, 0);
    fill_rect(&mut pm, 20, 7, 2, 2, 1);
    fill_rect(&mut pm, 2, 20, 19, 1, 1);
    pm.set_pixel(40, 30, 1).unwrap();
    pm.into()
}

fn depth_of(tree: &ContourTree, i: usize) -> usize {
    tree.ancestors(i).count()
}

#[test]
fn contour_reg() {
    let mut rp = RegParams::new("contour");

    let pixs = create_test_shapes();
    let tree = find_contours(&pixs).expect("find_contours");
    eprintln!("Contours: {}", tree.len());

    // --- Test 1: counts ---
    // square, ring outer, ring hole, dot, line, pixel
    rp.compare_values(6.0, tree.len() as f64, 0.0);
    let holes = tree
        .contours()
        .iter()
        .filter(|c| c.kind == BorderKind::Hole)
        .count();
    rp.compare_values(1.0, holes as f64, 0.0);
    rp.compare_values(4.0, tree.roots().count() as f64, 0.0);

    // --- Test 2: nesting ---
    let hole = tree
        .contours()
        .iter()
        .position(|c| c.kind == BorderKind::Hole)
        .expect("hole");
    let dot = tree
        .contours()
        .iter()
        .position(|c| c.bounding_box().map(|b| (b.x, b.y)) == Some((20, 7)))
        .expect("dot");
    rp.compare_values(1.0, depth_of(&tree, hole) as f64, 0.0);
    rp.compare_values(2.0, depth_of(&tree, dot) as f64, 0.0);
    rp.check(tree.node(dot).unwrap().parent == Some(hole), "dot inside hole");
    let ring = tree.node(hole).unwrap().parent.expect("ring");
    let ring_box = tree.contour(ring).unwrap().bounding_box().unwrap();
    rp.compare_values(144.0, ring_box.area() as f64, 0.0);

    // --- Test 3: every border is closed ---
    for (i, c) in tree.contours().iter().enumerate() {
        eprintln!(
            "  contour[{i}]: {:?}, {} points, box {:?}",
            c.kind,
            c.len(),
            c.bounding_box()
        );
        rp.check(!c.is_empty(), "contour not empty");
        rp.check(c.is_closed(1), "contour closed");
    }

    // --- Test 4: line and isolated pixel ---
    let line = tree
        .contours()
        .iter()
        .find(|c| c.bounding_box().map(|b| (b.w, b.h)) == Some((19, 1)))
        .expect("line");
    // A 1-pixel-thick line is walked out and back
    rp.compare_values(36.0, line.len() as f64, 0.0);
    let single = tree
        .contours()
        .iter()
        .find(|c| c.len() == 1)
        .expect("single pixel");
    rp.compare_values(40.0, single.points[0].x as f64, 0.0);
    rp.compare_values(30.0, single.points[0].y as f64, 0.0);

    // --- Test 5: deterministic ---
    let again = find_contours(&pixs).expect("find_contours again");
    rp.check(again == tree, "tracing is deterministic");

    assert!(rp.cleanup());
}
