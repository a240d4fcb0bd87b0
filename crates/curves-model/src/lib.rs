//! Curves3D editing state.
//!
//! [`ControlPointStore`] owns the authoritative control polygon and notifies
//! listeners on every effective change. [`CurveScene`] pairs a store with the
//! selected curve family and keeps the composed polyline in sync.

pub mod scene;
pub mod store;

pub use scene::CurveScene;
pub use store::{ControlPointStore, ListenerId};
