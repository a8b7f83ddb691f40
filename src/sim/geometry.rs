//! Point containment for silhouettes
//!
//! Analytic replacements for a canvas' path hit testing: polygons are tested
//! by ray crossing, curves by their chord-closed fill or distance to the centerline.

use glam::Vec2;

/// Segments used to flatten a quadratic curve
const CURVE_SEGMENTS: usize = 24;

/// Even-odd point-in-polygon test (polygon implicitly closed)
pub fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Distance from `p` to the segment `a..b`
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-8 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// A quadratic Bézier curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCurve {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl QuadraticCurve {
    pub fn new(start: Vec2, control: Vec2, end: Vec2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Point at parameter `t` in [0, 1]
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.start + offset, self.control + offset, self.end + offset)
    }

    /// Approximate distance from `p` to the curve
    pub fn distance_to(&self, p: Vec2) -> f32 {
        let mut prev = self.start;
        let mut best = f32::MAX;
        for i in 1..=CURVE_SEGMENTS {
            let next = self.point_at(i as f32 / CURVE_SEGMENTS as f32);
            best = best.min(distance_to_segment(p, prev, next));
            prev = next;
        }
        best
    }

    /// Whether `p` lies on the curve stroked with `width`
    pub fn stroke_contains(&self, p: Vec2, width: f32) -> bool {
        self.distance_to(p) <= width * 0.5
    }

    /// Whether `p` lies in the region enclosed by the curve and its chord
    pub fn fill_contains(&self, p: Vec2) -> bool {
        let outline: Vec<Vec2> = (0..=CURVE_SEGMENTS)
            .map(|i| self.point_at(i as f32 / CURVE_SEGMENTS as f32))
            .collect();
        polygon_contains(&outline, p)
    }
}
