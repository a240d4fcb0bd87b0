use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a control polygon or a tessellated curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Bounds of `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::new(*first, *first);
        for &p in rest {
            aabb.extend(p);
        }
        Some(aabb)
    }

    pub fn extend(&mut self, p: Point3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Length of the box diagonal, used by viewers to pick a camera distance.
    pub fn diagonal(&self) -> f64 {
        self.extents().length()
    }

    pub fn contains_point(&self, p: Point3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}
