//! Iterative neighbor-average mesh smoothing
//!
//! Each pass sweeps the vertices in ascending index order and replaces each
//! position with the mean of its triangle neighborhood. The sweep is
//! in-place, so later vertices see the already-updated positions of earlier
//! ones (a Gauss-Seidel rather than Jacobi scheme). The sequential
//! read-after-write dependency is observable output; do not parallelize the
//! sweep without changing the documented semantics.

use scanmesh_core::{Error, Point3f, Result, ScanMesh, Vector3};

/// Smooth vertex positions in place over `passes` full sweeps.
///
/// The averaging set of vertex `i` is the union of the vertices of every
/// triangle containing `i`, which by construction includes `i` itself.
/// Vertices belonging to no triangle are left unchanged. `passes == 0`
/// returns the positions untouched. The triangle list is never modified.
///
/// Triangle indices outside the position slice are a contract violation.
pub fn smooth_positions(
    points: &mut [Point3f],
    triangles: &[[usize; 3]],
    passes: usize,
) -> Result<()> {
    let n = points.len();
    for (t, tri) in triangles.iter().enumerate() {
        for &v in tri {
            if v >= n {
                return Err(Error::InvalidData(format!(
                    "triangle {} references vertex {} but only {} positions given",
                    t, v, n
                )));
            }
        }
    }

    if passes == 0 || n == 0 || triangles.is_empty() {
        return Ok(());
    }

    // Vertex -> incident triangles, built once; rescanning the triangle
    // list per vertex per pass would be quadratic.
    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (t, tri) in triangles.iter().enumerate() {
        for &v in tri {
            incident[v].push(t);
        }
    }

    let mut neighbors: Vec<usize> = Vec::new();
    for _ in 0..passes {
        for i in 0..n {
            if incident[i].is_empty() {
                continue;
            }

            neighbors.clear();
            for &t in &incident[i] {
                for &v in &triangles[t] {
                    if !neighbors.contains(&v) {
                        neighbors.push(v);
                    }
                }
            }

            let mut sum = Vector3::new(0.0f32, 0.0, 0.0);
            for &v in &neighbors {
                sum += points[v].coords;
            }
            points[i] = Point3f::from(sum / neighbors.len() as f32);
        }
    }

    Ok(())
}

/// Smooth a mesh's vertex positions in place.
///
/// Connectivity and colors are untouched; only positions move.
pub fn smooth(mesh: &mut ScanMesh, passes: usize) -> Result<()> {
    smooth_positions(&mut mesh.points, &mesh.triangles, passes)
}
