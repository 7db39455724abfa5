//! Cleanup pipeline sequencing crop, triangulation, pruning and smoothing

use crate::{crop_to_box, prune, smooth, triangulate};
use scanmesh_core::{Aabb, Result, ScanCloud, ScanMesh};

/// Parameters for the cleanup pipeline
#[derive(Debug, Clone, Copy)]
pub struct CleanupParams {
    /// Capture volume; reconstructed points outside it are discarded
    pub bounds: Aabb,
    /// Longest 3D edge a mesh triangle may have
    pub max_edge_length: f32,
    /// Number of neighbor-average smoothing passes (0 disables smoothing)
    pub smooth_passes: usize,
}

impl Default for CleanupParams {
    fn default() -> Self {
        Self {
            // Default capture volume of the scanning rig.
            bounds: Aabb::new(-12.0, 24.0, -5.0, 25.0, -25.0, -8.0),
            max_edge_length: 2.0,
            smooth_passes: 1,
        }
    }
}

/// Run the full cleanup pipeline on a reconstructed scan cloud.
///
/// Crops the cloud to the capture volume, Delaunay-triangulates the
/// left-camera projection of the survivors, prunes over-long triangles
/// together with the vertices they orphan, and finally smooths the result.
/// Each stage consumes its input fully before the next begins.
///
/// A cloud that is empty (or too small to triangulate) after cropping
/// yields an empty mesh rather than an error.
pub fn clean_mesh(cloud: &ScanCloud, params: &CleanupParams) -> Result<ScanMesh> {
    let cropped = crop_to_box(cloud, &params.bounds);
    if cropped.len() < 3 {
        return Ok(ScanMesh::new());
    }

    let triangles = triangulate(&cropped.proj_left)?;
    let mut mesh = prune(&cropped, &triangles, params.max_edge_length)?;

    if params.smooth_passes > 0 {
        smooth(&mut mesh, params.smooth_passes)?;
    }

    Ok(mesh)
}
