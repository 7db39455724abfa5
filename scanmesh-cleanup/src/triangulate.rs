//! 2D Delaunay triangulation of camera-plane projections
//!
//! The cleanup pipeline triangulates the left-camera 2D correspondences and
//! applies the resulting connectivity to the 3D points, which share the
//! same indexing.

use scanmesh_core::{Error, Point2f, Result};
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::collections::HashMap;

/// 2D Delaunay triangulation using the spade crate.
///
/// Returns the inner faces as index triples into the input slice. Duplicate
/// input points collapse onto the first occurrence, so every returned index
/// is valid for the caller's arrays.
pub fn triangulate(points: &[Point2f]) -> Result<Vec<[usize; 3]>> {
    if points.len() < 3 {
        return Err(Error::InvalidData(
            "Need at least 3 points for triangulation".to_string(),
        ));
    }

    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();

    // Inserted coordinates come back verbatim from face handles, so an
    // exact bit-pattern table recovers the original index of each vertex.
    let mut index_of: HashMap<(u64, u64), usize> = HashMap::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let p = Point2::new(p.x as f64, p.y as f64);
        triangulation
            .insert(p)
            .map_err(|e| Error::Algorithm(format!("Delaunay insertion failed: {:?}", e)))?;
        index_of.entry((p.x.to_bits(), p.y.to_bits())).or_insert(i);
    }

    let mut triangles = Vec::with_capacity(triangulation.num_inner_faces());
    for face in triangulation.inner_faces() {
        let mut indices = [0usize; 3];
        for (slot, vertex) in face.vertices().iter().enumerate() {
            let pos = vertex.position();
            let idx = index_of
                .get(&(pos.x.to_bits(), pos.y.to_bits()))
                .copied()
                .ok_or_else(|| {
                    Error::Algorithm(
                        "Failed to match triangle vertex to original point".to_string(),
                    )
                })?;
            indices[slot] = idx;
        }
        triangles.push(indices);
    }

    Ok(triangles)
}
