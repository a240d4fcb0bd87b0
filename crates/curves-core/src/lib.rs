pub mod config;
pub mod error;
pub mod traits;

pub use config::{BSplineJoins, CurveConfig, CATMULL_ROM_TENSION, CURVE_DETAIL};
pub use error::{CurveError, Result};
