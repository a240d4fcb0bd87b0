//! Bézier curves of arbitrary degree.

use curves_math::{Point3, Vector3};

use super::Curve;

/// Evaluate the Bézier curve defined by `control_points` at `t`.
///
/// Runs `n - 1` rounds of pairwise blending `(1 - t) * P[i] + t * P[i + 1]`,
/// each round shrinking the working set by one, and returns the last
/// remaining point.
///
/// An empty slice yields the origin. That value carries no geometric
/// meaning; callers check the point count first.
pub fn de_casteljau(control_points: &[Point3], t: f64) -> Point3 {
    if control_points.is_empty() {
        return Point3::ZERO;
    }

    let mut points = control_points.to_vec();
    let n = points.len() - 1;
    let s = 1.0 - t;

    for r in 1..=n {
        for i in 0..=(n - r) {
            points[i] = s * points[i] + t * points[i + 1];
        }
    }

    points[0]
}

/// A single Bézier curve of degree `control_points.len() - 1`, parameterized over `[0, 1]`.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    pub control_points: Vec<Point3>,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point3>) -> Self {
        Self { control_points }
    }

    pub fn degree(&self) -> usize {
        self.control_points.len().saturating_sub(1)
    }
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Point3 {
        de_casteljau(&self.control_points, t)
    }

    /// Hodograph: `n * B(ΔP, t)` where `ΔP[i] = P[i + 1] - P[i]`.
    fn tangent_at(&self, t: f64) -> Vector3 {
        let n = self.degree();
        if n == 0 {
            return Vector3::ZERO;
        }
        let deltas: Vec<Vector3> = self
            .control_points
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect();
        n as f64 * de_casteljau(&deltas, t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curves_math::DVec3;

    fn square() -> Vec<Point3> {
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(10.0, 10.0, 0.0),
            DVec3::new(0.0, 10.0, 0.0),
        ]
    }

    #[test]
    fn test_de_casteljau_empty_is_origin() {
        assert_eq!(de_casteljau(&[], 0.3), DVec3::ZERO);
    }

    #[test]
    fn test_de_casteljau_single_point() {
        let p = DVec3::new(1.5, -2.0, 7.0);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_eq!(de_casteljau(&[p], t), p);
        }
    }

    #[test]
    fn test_de_casteljau_endpoints() {
        let pts = square();
        assert_eq!(de_casteljau(&pts, 0.0), pts[0]);
        assert_eq!(de_casteljau(&pts, 1.0), pts[3]);
    }

    #[test]
    fn test_de_casteljau_cubic_midpoint() {
        // B(0.5) = (P0 + 3 P1 + 3 P2 + P3) / 8
        let pts = square();
        let mid = de_casteljau(&pts, 0.5);
        assert!(mid.abs_diff_eq(DVec3::new(7.5, 5.0, 0.0), 1e-12));
    }

    #[test]
    fn test_quadratic_matches_bernstein() {
        let pts = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.5, 1.0, 2.0),
            DVec3::new(1.0, 0.0, 0.0),
        ];
        let t = 0.3;
        let s = 1.0 - t;
        let expected = s * s * pts[0] + 2.0 * s * t * pts[1] + t * t * pts[2];
        assert!(de_casteljau(&pts, t).abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn test_tangent_at_ends_follows_control_legs() {
        let curve = BezierCurve::new(square());
        let start = curve.tangent_at(0.0);
        let end = curve.tangent_at(1.0);
        assert!(start.abs_diff_eq(DVec3::new(30.0, 0.0, 0.0), 1e-12));
        assert!(end.abs_diff_eq(DVec3::new(-30.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn test_tangent_of_single_point_is_zero() {
        let curve = BezierCurve::new(vec![DVec3::ONE]);
        assert_eq!(curve.degree(), 0);
        assert_eq!(curve.tangent_at(0.5), DVec3::ZERO);
    }
}
