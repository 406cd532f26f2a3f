//! Border following on binary images
//!
//! Implements topological border following (Suzuki and Abe, 1985) with
//! 8-connectivity. Every outer border and every hole border of a 1 bpp
//! image is traced, keeping every border pixel, and the nesting of the
//! borders is recorded as a [`ContourTree`].
//!
//! The image is surrounded by an implicit frame of background pixels, so
//! foreground touching the image edge still yields closed borders.

use crate::contour::{BorderKind, Contour, ContourTree};
use crate::error::{RegionError, RegionResult};
use textmask_core::{Pix, PixelDepth, Point};

/// Neighbor offsets, counter-clockwise on screen starting East.
const DIRS: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Direction index looking West.
const WEST: usize = 4;
/// Direction index looking East.
const EAST: usize = 0;

/// Label grid with a one-pixel zero frame.
///
/// Cell values: 0 background, 1 unvisited foreground, `+n` / `-n` border
/// pixels of border number `n`.
struct LabelGrid {
    width: i32,
    cells: Vec<i32>,
}

impl LabelGrid {
    fn from_binary(pix: &Pix) -> Self {
        let width = pix.width() as i32 + 2;
        let height = pix.height() as i32 + 2;
        let mut cells = vec![0i32; (width * height) as usize];
        for y in 0..pix.height() {
            for x in 0..pix.width() {
                if pix.get_pixel_unchecked(x, y) != 0 {
                    cells[((y as i32 + 1) * width + x as i32 + 1) as usize] = 1;
                }
            }
        }
        Self { width, cells }
    }

    #[inline]
    fn get(&self, x: i32, y: i32) -> i32 {
        self.cells[(y * self.width + x) as usize]
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, val: i32) {
        self.cells[(y * self.width + x) as usize] = val;
    }

    #[inline]
    fn step(&self, (x, y): (i32, i32), dir: usize) -> (i32, i32) {
        let (dx, dy) = DIRS[dir % 8];
        (x + dx, y + dy)
    }

    /// Follow one border starting at `start`, whose background neighbor
    /// lies in direction `from`. Marks the border pixels with `nbd` and
    /// returns them in image coordinates.
    fn follow(&mut self, start: (i32, i32), from: usize, nbd: i32) -> Vec<Point> {
        let to_image = |(x, y): (i32, i32)| Point::new(x - 1, y - 1);

        // Clockwise search around the start for the first foreground pixel
        let mut s = from;
        let second = loop {
            s = (s + 7) % 8;
            let p = self.step(start, s);
            if self.get(p.0, p.1) != 0 {
                break Some(p);
            }
            if s == from {
                break None;
            }
        };
        let Some(second) = second else {
            self.set(start.0, start.1, -nbd);
            return vec![to_image(start)];
        };

        let mut points = Vec::new();
        let mut cur = start;
        loop {
            // Counter-clockwise search from just past the previous pixel
            let s_end = s;
            let mut k = s;
            let next = loop {
                k += 1;
                let p = self.step(cur, k);
                if self.get(p.0, p.1) != 0 {
                    break p;
                }
            };
            let found = k % 8;

            // The East neighbor was examined and found to be background
            if found >= 1 && found <= s_end {
                self.set(cur.0, cur.1, -nbd);
            } else if self.get(cur.0, cur.1) == 1 {
                self.set(cur.0, cur.1, nbd);
            }
            points.push(to_image(cur));

            if next == start && cur == second {
                break;
            }
            cur = next;
            s = (found + 4) % 8;
        }
        points
    }
}

/// Trace all borders of a binary image.
///
/// # Returns
///
/// A [`ContourTree`] whose contours are numbered in raster discovery
/// order. An outer border's parent is the hole (or, at top level,
/// nothing) that surrounds it; a hole border's parent is the outer
/// border of the component containing it. An isolated pixel yields a
/// one-point contour.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] unless the image is 1 bpp.
pub fn find_contours(pix: &Pix) -> RegionResult<ContourTree> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(RegionError::UnsupportedDepth {
            expected: "1-bpp binary",
            actual: pix.depth().bits(),
        });
    }

    let mut grid = LabelGrid::from_binary(pix);
    let (w, h) = (pix.width() as i32, pix.height() as i32);

    let mut contours: Vec<Contour> = Vec::new();
    let mut parents: Vec<Option<usize>> = Vec::new();
    // Border number 1 is the frame; border n is contour n - 2
    let mut nbd = 1i32;

    for y in 1..=h {
        let mut lnbd = 1i32;
        for x in 1..=w {
            let f = grid.get(x, y);
            if f == 0 {
                continue;
            }

            let start = if f == 1 && grid.get(x - 1, y) == 0 {
                Some((BorderKind::Outer, WEST))
            } else if f >= 1 && grid.get(x + 1, y) == 0 {
                if f > 1 {
                    lnbd = f;
                }
                Some((BorderKind::Hole, EAST))
            } else {
                None
            };

            if let Some((kind, from)) = start {
                nbd += 1;
                let enclosing = (lnbd >= 2).then(|| (lnbd - 2) as usize);
                let parent = match (kind, enclosing) {
                    (_, None) => None,
                    (BorderKind::Outer, Some(b)) => match contours[b].kind {
                        BorderKind::Outer => parents[b],
                        BorderKind::Hole => Some(b),
                    },
                    (BorderKind::Hole, Some(b)) => match contours[b].kind {
                        BorderKind::Outer => Some(b),
                        BorderKind::Hole => parents[b],
                    },
                };
                let points = grid.follow((x, y), from, nbd);
                contours.push(Contour::new(kind, points));
                parents.push(parent);
            }

            let f = grid.get(x, y);
            if f != 1 {
                lnbd = f.abs();
            }
        }
    }

    ContourTree::from_parents(contours, &parents)
}
