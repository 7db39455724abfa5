//! Colored triangle mesh produced by the cleanup pipeline

use crate::error::{Error, Result};
use crate::point::{Point3f, Rgb};
use serde::{Deserialize, Serialize};

/// A triangle mesh with per-vertex colors.
///
/// `points` and `colors` are parallel; every triangle references three
/// indices into `points`. After pruning, every vertex is referenced by at
/// least one triangle and every triangle index is in range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanMesh {
    pub points: Vec<Point3f>,
    pub colors: Vec<Rgb>,
    pub triangles: Vec<[usize; 3]>,
}

impl ScanMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Get the number of triangles
    pub fn face_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh has no geometry
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() || self.triangles.is_empty()
    }

    /// Check the mesh invariants: colors parallel to points and every
    /// triangle index in range. Violations are contract errors, not
    /// recoverable conditions.
    pub fn validate(&self) -> Result<()> {
        if self.colors.len() != self.points.len() {
            return Err(Error::InvalidData(format!(
                "mesh has {} points but {} colors",
                self.points.len(),
                self.colors.len()
            )));
        }
        for (t, tri) in self.triangles.iter().enumerate() {
            for &v in tri {
                if v >= self.points.len() {
                    return Err(Error::InvalidData(format!(
                        "triangle {} references vertex {} but mesh has only {} points",
                        t,
                        v,
                        self.points.len()
                    )));
                }
            }
        }
        Ok(())
    }
}
