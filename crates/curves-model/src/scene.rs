//! Editing state consumed by a viewport: control points, curve family, polyline.

use curves_core::traits::Validate;
use curves_core::{CurveConfig, Result};
use curves_geometry::{compose, CurveType};
use curves_math::{Aabb3, Point3};

use crate::store::{ControlPointStore, ListenerId};

/// Owns the control points and the active curve family, and keeps the
/// composed polyline current.
///
/// Every effective edit recomputes the polyline in full before the call
/// returns. Edits that change nothing leave it untouched.
#[derive(Debug)]
pub struct CurveScene {
    store: ControlPointStore,
    curve_type: CurveType,
    config: CurveConfig,
    polyline: Vec<Point3>,
    recomputations: u64,
}

impl CurveScene {
    pub fn new(config: CurveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: ControlPointStore::new(),
            curve_type: CurveType::default(),
            config,
            polyline: Vec::new(),
            recomputations: 0,
        })
    }

    pub fn points(&self) -> &[Point3] {
        self.store.get()
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// The tessellated curve for the current points and family.
    pub fn polyline(&self) -> &[Point3] {
        &self.polyline
    }

    /// Number of full recomputations performed so far.
    pub fn recompute_count(&self) -> u64 {
        self.recomputations
    }

    /// Register a listener on the underlying store. It receives the new
    /// control points on every effective change, before the polyline is
    /// recomputed.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Point3]) + 'static) -> ListenerId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn set_points(&mut self, points: Vec<Point3>) -> bool {
        let changed = self.store.set(points);
        if changed {
            self.recompute();
        }
        changed
    }

    pub fn move_point(&mut self, index: usize, position: Point3) -> Result<bool> {
        let changed = self.store.move_point(index, position)?;
        if changed {
            self.recompute();
        }
        Ok(changed)
    }

    pub fn set_curve_type(&mut self, curve_type: CurveType) -> bool {
        if self.curve_type == curve_type {
            return false;
        }
        self.curve_type = curve_type;
        self.recompute();
        true
    }

    /// Bounds of the control points and the polyline together.
    pub fn bounds(&self) -> Option<Aabb3> {
        match (self.store.bounds(), Aabb3::from_points(&self.polyline)) {
            (Some(a), Some(b)) => Some(a.merge(&b)),
            (a, b) => a.or(b),
        }
    }

    fn recompute(&mut self) {
        self.polyline = compose(self.store.get(), self.curve_type, &self.config);
        self.recomputations += 1;
        log::debug!(
            "Recomputed {} curve: {} control points -> {} samples",
            self.curve_type,
            self.store.len(),
            self.polyline.len()
        );
    }
}
