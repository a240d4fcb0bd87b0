//! Tessellation settings shared by the evaluator and the composer.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};
use crate::traits::Validate;

/// Default number of parametric steps per curve, segment, or window.
pub const CURVE_DETAIL: usize = 100;

/// Catmull-Rom tangent scale.
pub const CATMULL_ROM_TENSION: f64 = 0.5;

/// How consecutive uniform B-spline windows are stitched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BSplineJoins {
    /// Every window contributes all of its samples, so each interior joint
    /// appears twice.
    #[default]
    Overlapping,
    /// The leading sample of every window after the first is dropped.
    Deduplicated,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Parametric steps; each span yields `resolution + 1` samples.
    pub resolution: usize,
    /// Tangent scale for Catmull-Rom segments.
    pub tension: f64,
    pub bspline_joins: BSplineJoins,
}

impl CurveConfig {
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }

    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    pub fn with_bspline_joins(mut self, joins: BSplineJoins) -> Self {
        self.bspline_joins = joins;
        self
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            resolution: CURVE_DETAIL,
            tension: CATMULL_ROM_TENSION,
            bspline_joins: BSplineJoins::Overlapping,
        }
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(CurveError::InvalidConfig(
                "resolution must be at least 1".into(),
            ));
        }
        if !self.tension.is_finite() {
            return Err(CurveError::InvalidConfig(format!(
                "tension must be finite, got {}",
                self.tension
            )));
        }
        Ok(())
    }
}
