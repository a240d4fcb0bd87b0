//! Curve traits and implementations.

mod bezier;
mod hermite;
mod uniform_bspline;

use curves_math::{Point3, Vector3};

pub use bezier::{de_casteljau, BezierCurve};
pub use hermite::HermiteSegment;
pub use uniform_bspline::UniformBSplineSegment;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}
