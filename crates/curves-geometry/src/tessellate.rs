//! Uniform tessellation of curves and curve families into polylines.

use curves_core::BSplineJoins;
use curves_math::{Point3, Vector3};

use crate::curve::{BezierCurve, Curve, HermiteSegment, UniformBSplineSegment};

/// Sample `curve` at `resolution + 1` evenly spaced parameters across its domain.
///
/// Both domain ends are always included. A `resolution` of zero is treated as one.
pub fn sample_uniform(curve: &dyn Curve, resolution: usize) -> Vec<Point3> {
    let steps = resolution.max(1);
    let (t_min, t_max) = curve.domain();
    let span = t_max - t_min;

    (0..=steps)
        .map(|i| curve.point_at(t_min + span * (i as f64 / steps as f64)))
        .collect()
}

/// Tessellate the whole control polygon as one Bézier curve of degree `n - 1`.
///
/// Fewer than two points are returned unchanged.
pub fn evaluate_bezier(points: &[Point3], resolution: usize) -> Vec<Point3> {
    if points.len() < 2 {
        return points.to_vec();
    }
    sample_uniform(&BezierCurve::new(points.to_vec()), resolution)
}

/// Tessellate a single cubic Hermite segment.
pub fn evaluate_hermite(
    p1: Point3,
    p4: Point3,
    r1: Vector3,
    r4: Vector3,
    resolution: usize,
) -> Vec<Point3> {
    sample_uniform(&HermiteSegment::new(p1, p4, r1, r4), resolution)
}

/// Tessellate the Catmull-Rom segment spanning `p1 -> p2`.
pub fn evaluate_catmull_rom_segment(
    p0: Point3,
    p1: Point3,
    p2: Point3,
    p3: Point3,
    tension: f64,
    resolution: usize,
) -> Vec<Point3> {
    let seg = HermiteSegment::catmull_rom(p0, p1, p2, p3, tension);
    evaluate_hermite(seg.p1, seg.p4, seg.r1, seg.r4, resolution)
}

/// Tessellate a uniform cubic B-spline over every 4-point window of `points`.
///
/// `_degree` is accepted for call-site compatibility; the basis is always the
/// uniform cubic one. Fewer than four points are returned unchanged.
///
/// With [`BSplineJoins::Overlapping`] every window contributes `resolution + 1`
/// samples, so neighbouring windows repeat their shared joint.
pub fn evaluate_bspline(
    points: &[Point3],
    _degree: usize,
    resolution: usize,
    joins: BSplineJoins,
) -> Vec<Point3> {
    if points.len() < 4 {
        return points.to_vec();
    }

    let steps = resolution.max(1);
    let windows = points.len() - 3;
    let mut polyline = Vec::with_capacity(windows * (steps + 1));

    for (w, window) in points.windows(4).enumerate() {
        let Some(segment) = UniformBSplineSegment::from_window(window) else {
            continue;
        };
        let samples = sample_uniform(&segment, steps);
        let skip = match joins {
            BSplineJoins::Deduplicated if w > 0 => 1,
            _ => 0,
        };
        polyline.extend(samples.into_iter().skip(skip));
    }

    polyline
}
