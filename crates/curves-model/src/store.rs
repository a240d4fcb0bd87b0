use curves_core::{CurveError, Result};
use curves_math::{Aabb3, Point3};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`ControlPointStore::subscribe`].
    pub struct ListenerId;
}

type Listener = Box<dyn FnMut(&[Point3])>;

/// Owner of the ordered control polygon.
///
/// The sequence is only ever replaced as a whole. Replacing it with an equal
/// sequence is a no-op; any other replacement calls every listener with the
/// new sequence before returning.
#[derive(Default)]
pub struct ControlPointStore {
    points: Vec<Point3>,
    listeners: SlotMap<ListenerId, Listener>,
}

impl ControlPointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(points: Vec<Point3>) -> Self {
        Self {
            points,
            listeners: SlotMap::with_key(),
        }
    }

    pub fn get(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.points)
    }

    /// Replace the sequence. Returns `false` (and notifies nobody) when
    /// `points` equals the current sequence element for element.
    pub fn set(&mut self, points: Vec<Point3>) -> bool {
        if self.points == points {
            return false;
        }
        self.points = points;

        log::debug!("Control points updated: {} points", self.points.len());
        for (i, p) in self.points.iter().enumerate() {
            log::trace!("  [{}] ({}, {}, {})", i, p.x, p.y, p.z);
        }

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.points);
        }
        true
    }

    /// Replace the point at `index`, leaving every other point as is.
    pub fn move_point(&mut self, index: usize, position: Point3) -> Result<bool> {
        let len = self.points.len();
        if index >= len {
            return Err(CurveError::IndexOutOfRange { index, len });
        }
        let mut points = self.points.clone();
        points[index] = position;
        Ok(self.set(points))
    }

    /// Register a listener called with the new sequence on every effective change.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Point3]) + 'static) -> ListenerId {
        self.listeners.insert(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for ControlPointStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlPointStore")
            .field("points", &self.points)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
