//! Uniform cubic B-spline window.

use curves_math::{Point3, Vector3};

use super::Curve;

/// One span of a uniform cubic B-spline, controlled by four consecutive points.
///
/// The span approximates its control points: it starts near `(P0 + 4 P1 + P2) / 6`
/// and ends near `(P1 + 4 P2 + P3) / 6`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformBSplineSegment {
    pub control_points: [Point3; 4],
}

impl UniformBSplineSegment {
    pub fn new(control_points: [Point3; 4]) -> Self {
        Self { control_points }
    }

    /// Build from a 4-point window; `None` if the slice is not exactly four long.
    pub fn from_window(window: &[Point3]) -> Option<Self> {
        let control_points: [Point3; 4] = window.try_into().ok()?;
        Some(Self::new(control_points))
    }
}

fn basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        (-t3 + 3.0 * t2 - 3.0 * t + 1.0) / 6.0,
        (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
        t3 / 6.0,
    ]
}

fn basis_derivs(t: f64) -> [f64; 4] {
    let t2 = t * t;
    [
        (-3.0 * t2 + 6.0 * t - 3.0) / 6.0,
        (9.0 * t2 - 12.0 * t) / 6.0,
        (-9.0 * t2 + 6.0 * t + 3.0) / 6.0,
        3.0 * t2 / 6.0,
    ]
}

fn blend(weights: [f64; 4], points: &[Point3; 4]) -> Point3 {
    weights
        .iter()
        .zip(points)
        .fold(Point3::ZERO, |acc, (&w, &p)| acc + p * w)
}

impl Curve for UniformBSplineSegment {
    fn point_at(&self, t: f64) -> Point3 {
        blend(basis(t), &self.control_points)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        blend(basis_derivs(t), &self.control_points)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
