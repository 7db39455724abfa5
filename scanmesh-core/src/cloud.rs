//! Index-aligned scan cloud container

use crate::error::{Error, Result};
use crate::point::{Point2f, Point3f, Rgb};
use serde::{Deserialize, Serialize};

/// A triangulated-scan point cloud as produced by stereo reconstruction.
///
/// All four vectors are parallel: index `i` refers to the same physical
/// surface sample in each of them. `proj_left` / `proj_right` hold the 2D
/// image-plane correspondences used to drive triangulation. Any operation
/// that removes index `i` from one vector must remove it from all of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanCloud {
    pub points: Vec<Point3f>,
    pub colors: Vec<Rgb>,
    pub proj_left: Vec<Point2f>,
    pub proj_right: Vec<Point2f>,
}

impl ScanCloud {
    /// Create a new empty scan cloud
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new scan cloud with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            proj_left: Vec::with_capacity(capacity),
            proj_right: Vec::with_capacity(capacity),
        }
    }

    /// Assemble a scan cloud from the four reconstruction arrays.
    ///
    /// Fails with [`Error::InvalidData`] if the arrays are not all the same
    /// length; mismatched inputs are never truncated or padded.
    pub fn from_parts(
        points: Vec<Point3f>,
        colors: Vec<Rgb>,
        proj_left: Vec<Point2f>,
        proj_right: Vec<Point2f>,
    ) -> Result<Self> {
        let n = points.len();
        if colors.len() != n || proj_left.len() != n || proj_right.len() != n {
            return Err(Error::InvalidData(format!(
                "scan cloud arrays must be index-aligned: {} points, {} colors, {} left projections, {} right projections",
                n,
                colors.len(),
                proj_left.len(),
                proj_right.len()
            )));
        }
        Ok(Self {
            points,
            colors,
            proj_left,
            proj_right,
        })
    }

    /// Get the number of samples in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append one sample to all four arrays
    pub fn push(&mut self, point: Point3f, color: Rgb, left: Point2f, right: Point2f) {
        self.points.push(point);
        self.colors.push(color);
        self.proj_left.push(left);
        self.proj_right.push(right);
    }
}
