//! Convex hull and minimum-area enclosing rectangle

use super::Pta;

/// A rectangle of arbitrary orientation.
///
/// `angle` is the direction of the `width` side in degrees, measured
/// from the +x axis towards +y (clockwise on screen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    /// Center x coordinate
    pub cx: f32,
    /// Center y coordinate
    pub cy: f32,
    /// Extent along the `angle` direction
    pub width: f32,
    /// Extent perpendicular to the `angle` direction
    pub height: f32,
    /// Orientation in degrees
    pub angle: f32,
}

impl RotatedRect {
    /// Rectangle area.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// The four corners, in order around the rectangle.
    pub fn vertices(&self) -> Pta {
        let (sin_a, cos_a) = (self.angle as f64).to_radians().sin_cos();
        let (hw, hh) = (self.width as f64 / 2.0, self.height as f64 / 2.0);
        [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
            .iter()
            .map(|&(u, v)| {
                let x = self.cx as f64 + u * cos_a - v * sin_a;
                let y = self.cy as f64 + u * sin_a + v * cos_a;
                (x as f32, y as f32)
            })
            .collect()
    }
}

/// z component of `(a - o) x (b - o)`.
fn cross(o: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

fn hull_points(pta: &Pta) -> Vec<(f64, f64)> {
    let mut pts: Vec<(f64, f64)> = pta.iter().map(|(x, y)| (x as f64, y as f64)).collect();
    pts.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    // Andrew's monotone chain; collinear points are dropped
    let mut hull: Vec<(f64, f64)> = Vec::with_capacity(2 * pts.len());
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

impl Pta {
    /// Convex hull of the points, counter-clockwise in a y-up frame.
    ///
    /// Duplicate and collinear points are removed. Fewer than three
    /// distinct points are returned as they are (sorted).
    pub fn convex_hull(&self) -> Pta {
        hull_points(self)
            .into_iter()
            .map(|(x, y)| (x as f32, y as f32))
            .collect()
    }

    /// Minimum-area rectangle enclosing every point.
    ///
    /// Rotating calipers over the convex hull edges. Returns `None` for
    /// an empty array; a single point or collinear points give a
    /// degenerate rectangle with zero height.
    pub fn min_area_rect(&self) -> Option<RotatedRect> {
        let hull = hull_points(self);
        match hull.len() {
            0 => return None,
            1 => {
                return Some(RotatedRect {
                    cx: hull[0].0 as f32,
                    cy: hull[0].1 as f32,
                    width: 0.0,
                    height: 0.0,
                    angle: 0.0,
                });
            }
            _ => {}
        }

        let n = hull.len();
        let mut best: Option<(f64, RotatedRect)> = None;
        for i in 0..n {
            let o = hull[i];
            let next = hull[(i + 1) % n];
            let (ex, ey) = (next.0 - o.0, next.1 - o.1);
            let len = ex.hypot(ey);
            if len < f64::EPSILON {
                continue;
            }
            let (ux, uy) = (ex / len, ey / len);
            let (vx, vy) = (-uy, ux);

            let (mut min_u, mut max_u) = (f64::MAX, f64::MIN);
            let (mut min_v, mut max_v) = (f64::MAX, f64::MIN);
            for &(px, py) in &hull {
                let (dx, dy) = (px - o.0, py - o.1);
                let pu = dx * ux + dy * uy;
                let pv = dx * vx + dy * vy;
                min_u = min_u.min(pu);
                max_u = max_u.max(pu);
                min_v = min_v.min(pv);
                max_v = max_v.max(pv);
            }

            let (w, h) = (max_u - min_u, max_v - min_v);
            let area = w * h;
            if best.as_ref().is_some_and(|(a, _)| area >= *a) {
                continue;
            }
            let (cu, cv) = ((min_u + max_u) / 2.0, (min_v + max_v) / 2.0);
            let rect = RotatedRect {
                cx: (o.0 + cu * ux + cv * vx) as f32,
                cy: (o.1 + cu * uy + cv * vy) as f32,
                width: w as f32,
                height: h as f32,
                angle: uy.atan2(ux).to_degrees() as f32,
            };
            best = Some((area, rect));
        }
        best.map(|(_, rect)| rect)
    }
}
