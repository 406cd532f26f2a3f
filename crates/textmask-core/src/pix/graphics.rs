//! Graphics rendering functions
//!
//! Line and polygon outlines drawn as point arrays, then rendered onto
//! an image with clipping.

use super::{PixMut, PixelDepth};
use crate::error::Result;
use crate::pta::Pta;

/// Pixel operation for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelOp {
    /// Set pixels to maximum value (foreground)
    #[default]
    Set,
    /// Clear pixels to zero (background)
    Clear,
    /// Flip pixel values
    Flip,
}

/// Generate the points of a line from (x1, y1) to (x2, y2).
///
/// Bresenham stepping along the major axis; both end points are
/// included.
pub fn generate_line_pta(x1: i32, y1: i32, x2: i32, y2: i32) -> Pta {
    if x1 == x2 && y1 == y2 {
        let mut pta = Pta::with_capacity(1);
        pta.push(x1 as f32, y1 as f32);
        return pta;
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1 } else { -1 };
    let sy = if y2 > y1 { 1 } else { -1 };
    let (major, minor) = if dx >= dy { (dx, dy) } else { (dy, dx) };

    let mut pta = Pta::with_capacity(major as usize + 1);
    let (mut x, mut y) = (x1, y1);
    let mut err = major / 2;
    for _ in 0..=major {
        pta.push(x as f32, y as f32);
        err -= minor;
        let carry = err < 0;
        if carry {
            err += major;
        }
        if dx >= dy {
            x += sx;
            if carry {
                y += sy;
            }
        } else {
            y += sy;
            if carry {
                x += sx;
            }
        }
    }
    pta
}

/// Generate the outline of a polygon through `vertices`.
///
/// Vertices are rounded to the nearest integer. If `close` is true the
/// last vertex is joined back to the first.
pub fn generate_polyline_pta(vertices: &Pta, close: bool) -> Pta {
    let pts: Vec<(i32, i32)> = vertices
        .iter()
        .map(|(x, y)| (x.round() as i32, y.round() as i32))
        .collect();
    let mut out = Pta::new();
    match pts.len() {
        0 => return out,
        1 => {
            out.push(pts[0].0 as f32, pts[0].1 as f32);
            return out;
        }
        _ => {}
    }

    let nseg = if close { pts.len() } else { pts.len() - 1 };
    for i in 0..nseg {
        let (x1, y1) = pts[i];
        let (x2, y2) = pts[(i + 1) % pts.len()];
        let seg = generate_line_pta(x1, y1, x2, y2);
        // Joints are shared with the next segment
        for (k, (x, y)) in seg.iter().enumerate() {
            if k > 0 || i == 0 {
                out.push(x, y);
            }
        }
    }
    out
}

impl PixMut {
    /// Render a point array onto the image using the specified operation.
    ///
    /// Points outside the image bounds are clipped.
    pub fn render_pta(&mut self, pta: &Pta, op: PixelOp) -> Result<()> {
        let w = self.width() as i32;
        let h = self.height() as i32;
        let max_val = self.depth().max_value();

        for (x, y) in pta.iter() {
            let xi = x as i32;
            let yi = y as i32;
            if xi < 0 || xi >= w || yi < 0 || yi >= h {
                continue;
            }

            let (xu, yu) = (xi as u32, yi as u32);
            match op {
                PixelOp::Set => self.set_pixel_unchecked(xu, yu, max_val),
                PixelOp::Clear => self.set_pixel_unchecked(xu, yu, 0),
                PixelOp::Flip => {
                    let current = self.get_pixel_unchecked(xu, yu);
                    self.set_pixel_unchecked(xu, yu, current ^ max_val);
                }
            }
        }
        if self.depth() == PixelDepth::Bit1 {
            self.clear_pad_bits();
        }
        Ok(())
    }

    /// Render a one-pixel line from (x1, y1) to (x2, y2).
    pub fn render_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, op: PixelOp) -> Result<()> {
        let pta = generate_line_pta(x1, y1, x2, y2);
        self.render_pta(&pta, op)
    }

    /// Render a polygon outline connecting the vertices.
    pub fn render_polyline(&mut self, vertices: &Pta, close: bool, op: PixelOp) -> Result<()> {
        let pta = generate_polyline_pta(vertices, close);
        self.render_pta(&pta, op)
    }
}
