//! Curves3D geometry: parametric curve families and polyline composition.

pub mod compose;
pub mod curve;
pub mod tessellate;

pub use compose::{compose, CurveType};
pub use curve::Curve;
