//! Axis-aligned bounding box used for geometric pruning

use crate::point::Point3f;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box with inclusive bounds on all six faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3f,
    pub max: Point3f,
}

impl Aabb {
    /// Create a box from the six axis limits
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32, zmin: f32, zmax: f32) -> Self {
        Self {
            min: Point3f::new(xmin, ymin, zmin),
            max: Point3f::new(xmax, ymax, zmax),
        }
    }

    /// Create a box from its corner points
    pub fn from_min_max(min: Point3f, max: Point3f) -> Self {
        Self { min, max }
    }

    /// Test whether a point lies inside the box (bounds inclusive)
    pub fn contains(&self, p: &Point3f) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}
