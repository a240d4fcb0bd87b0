//! Curve family selection and polyline composition.

use std::fmt;
use std::str::FromStr;

use curves_core::{CurveConfig, CurveError};
use curves_math::Point3;
use serde::{Deserialize, Serialize};

use crate::tessellate::{evaluate_bezier, evaluate_bspline, evaluate_catmull_rom_segment};

/// The curve family used to turn control points into a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    /// One Bézier curve through the whole control polygon.
    #[default]
    Bezier,
    /// Catmull-Rom spline assembled from cubic Hermite segments.
    HermiteCatmullRom,
    /// Uniform cubic B-spline over sliding 4-point windows.
    BSpline,
}

impl CurveType {
    pub const ALL: [CurveType; 3] = [
        CurveType::Bezier,
        CurveType::HermiteCatmullRom,
        CurveType::BSpline,
    ];

    /// Label shown by curve selectors.
    pub fn label(self) -> &'static str {
        match self {
            CurveType::Bezier => "Bézier Curve (De Casteljau)",
            CurveType::HermiteCatmullRom => "Hermite Curve (Matricielle)",
            CurveType::BSpline => "B-Spline Curve",
        }
    }

    /// Minimum number of control points before the family produces a real curve.
    /// Below this the control points pass through unchanged.
    pub fn min_points(self) -> usize {
        match self {
            CurveType::Bezier | CurveType::HermiteCatmullRom => 2,
            CurveType::BSpline => 4,
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CurveType {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(curve_type) = Self::ALL.into_iter().find(|c| c.label() == trimmed) {
            return Ok(curve_type);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "bezier" | "bézier" => Ok(CurveType::Bezier),
            "hermite" | "catmull-rom" | "catmull_rom" | "hermite_catmull_rom" => {
                Ok(CurveType::HermiteCatmullRom)
            }
            "bspline" | "b-spline" => Ok(CurveType::BSpline),
            _ => Err(CurveError::UnknownCurveType(s.to_string())),
        }
    }
}

/// Build the polyline for `points` under `curve_type`.
///
/// Pure: the same inputs always produce the same output. Inputs below the
/// family minimum come back unchanged.
pub fn compose(points: &[Point3], curve_type: CurveType, config: &CurveConfig) -> Vec<Point3> {
    match curve_type {
        CurveType::Bezier => evaluate_bezier(points, config.resolution),
        CurveType::BSpline => evaluate_bspline(points, 3, config.resolution, config.bspline_joins),
        CurveType::HermiteCatmullRom => {
            catmull_rom_chain(points, config.tension, config.resolution)
        }
    }
}

/// Chain Catmull-Rom segments through every point of `points`.
///
/// The first and last points are duplicated as virtual neighbours so the chain
/// starts at the first point and ends at the last. Consecutive segments share
/// a joint sample; it is kept once.
pub fn catmull_rom_chain(points: &[Point3], tension: f64, resolution: usize) -> Vec<Point3> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut padded = Vec::with_capacity(points.len() + 2);
    padded.push(first);
    padded.extend_from_slice(points);
    padded.push(last);

    if padded.len() < 4 {
        return points.to_vec();
    }

    let steps = resolution.max(1);
    let mut polyline = Vec::with_capacity(1 + (points.len() - 1) * steps);

    for (s, w) in padded.windows(4).enumerate() {
        let segment = evaluate_catmull_rom_segment(w[0], w[1], w[2], w[3], tension, steps);
        let skip = usize::from(s > 0);
        polyline.extend(segment.into_iter().skip(skip));
    }

    polyline
}
