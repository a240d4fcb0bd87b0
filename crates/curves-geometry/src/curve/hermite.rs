//! Cubic Hermite segments and the Catmull-Rom construction on top of them.

use curves_math::{Point3, Vector3};

use super::Curve;

/// A cubic Hermite segment from `p1` to `p4` with end tangents `r1` and `r4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteSegment {
    pub p1: Point3,
    pub p4: Point3,
    pub r1: Vector3,
    pub r4: Vector3,
}

impl HermiteSegment {
    pub fn new(p1: Point3, p4: Point3, r1: Vector3, r4: Vector3) -> Self {
        Self { p1, p4, r1, r4 }
    }

    /// Catmull-Rom segment spanning `p1 -> p2`, tangents taken from the
    /// neighbours: `r1 = (p2 - p0) * tension`, `r4 = (p3 - p1) * tension`.
    pub fn catmull_rom(p0: Point3, p1: Point3, p2: Point3, p3: Point3, tension: f64) -> Self {
        Self::new(p1, p2, (p2 - p0) * tension, (p3 - p1) * tension)
    }
}

/// Hermite blending functions `[h1, h2, h3, h4]` at `t`.
fn basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        -2.0 * t3 + 3.0 * t2,
        t3 - 2.0 * t2 + t,
        t3 - t2,
    ]
}

fn basis_derivs(t: f64) -> [f64; 4] {
    let t2 = t * t;
    [
        6.0 * t2 - 6.0 * t,
        -6.0 * t2 + 6.0 * t,
        3.0 * t2 - 4.0 * t + 1.0,
        3.0 * t2 - 2.0 * t,
    ]
}

impl Curve for HermiteSegment {
    fn point_at(&self, t: f64) -> Point3 {
        let [h1, h2, h3, h4] = basis(t);
        self.p1 * h1 + self.p4 * h2 + self.r1 * h3 + self.r4 * h4
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let [d1, d2, d3, d4] = basis_derivs(t);
        self.p1 * d1 + self.p4 * d2 + self.r1 * d3 + self.r4 * d4
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
