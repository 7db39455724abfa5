//! Edge-length triangle pruning with dense vertex renumbering
//!
//! Structured-light reconstructions triangulated in image space contain
//! long sliver triangles bridging depth discontinuities, plus Delaunay hull
//! artifacts. Pruning removes any triangle with an over-long 3D edge, then
//! drops every vertex no surviving triangle references and renumbers the
//! remaining vertices densely.

use rayon::prelude::*;
use scanmesh_core::{Error, Result, ScanCloud, ScanMesh};

/// Remove over-long triangles and orphaned vertices.
///
/// A triangle is rejected when any of its three 3D edges is strictly longer
/// than `max_edge`; edges exactly at the threshold are kept. Surviving
/// triangles keep their relative order. Vertices referenced by no surviving
/// triangle (including points the triangulation never used) are dropped,
/// and the survivors are renumbered 0..K-1 in ascending original-index
/// order, with points and colors compacted to match.
///
/// All triangles being rejected is valid output: the result is an empty
/// mesh. A triangle index outside the cloud is a contract violation and
/// fails fast.
pub fn prune(cloud: &ScanCloud, triangles: &[[usize; 3]], max_edge: f32) -> Result<ScanMesh> {
    let n = cloud.len();
    for (t, tri) in triangles.iter().enumerate() {
        for &v in tri {
            if v >= n {
                return Err(Error::InvalidData(format!(
                    "triangle {} references vertex {} but cloud has only {} points",
                    t, v, n
                )));
            }
        }
    }

    // Per-triangle edge measurement is independent and order-preserving.
    let keep: Vec<bool> = triangles
        .par_iter()
        .map(|&[a, b, c]| {
            let (pa, pb, pc) = (cloud.points[a], cloud.points[b], cloud.points[c]);
            (pa - pb).magnitude() <= max_edge
                && (pb - pc).magnitude() <= max_edge
                && (pc - pa).magnitude() <= max_edge
        })
        .collect();

    let survivors: Vec<[usize; 3]> = triangles
        .iter()
        .zip(&keep)
        .filter(|(_, &k)| k)
        .map(|(tri, _)| *tri)
        .collect();

    let mut referenced = vec![false; n];
    for tri in &survivors {
        for &v in tri {
            referenced[v] = true;
        }
    }

    // Dense renumbering: one ascending pass assigns new indices in order of
    // the retained old indices and compacts points/colors in lockstep.
    let mut remap = vec![usize::MAX; n];
    let mut points = Vec::new();
    let mut colors = Vec::new();
    for i in 0..n {
        if referenced[i] {
            remap[i] = points.len();
            points.push(cloud.points[i]);
            colors.push(cloud.colors[i]);
        }
    }

    let triangles = survivors
        .iter()
        .map(|&[a, b, c]| [remap[a], remap[b], remap[c]])
        .collect();

    Ok(ScanMesh {
        points,
        colors,
        triangles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanmesh_core::{Point2f, Point3f};

    fn cloud_from_points(points: Vec<Point3f>) -> ScanCloud {
        let n = points.len();
        let colors = (0..n).map(|i| [i as f32 * 0.1, 0.0, 0.0]).collect();
        let left = (0..n).map(|i| Point2f::new(i as f32, 0.0)).collect();
        let right = (0..n).map(|i| Point2f::new(i as f32, 1.0)).collect();
        ScanCloud::from_parts(points, colors, left, right).unwrap()
    }

    #[test]
    fn test_prune_long_edge_triangle() {
        // Triangle (0,1,2) has max edge ~14.1; both edges to vertex 3 are ~170.
        let cloud = cloud_from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(10.0, 0.0, 0.0),
            Point3f::new(0.0, 10.0, 0.0),
            Point3f::new(100.0, 100.0, 100.0),
        ]);
        let triangles = [[0, 1, 2], [0, 1, 3]];

        let mesh = prune(&cloud, &triangles, 20.0).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangles[0], [0, 1, 2]);
        assert_eq!(mesh.points[2], Point3f::new(0.0, 10.0, 0.0));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_prune_threshold_is_exclusive() {
        // Equilateral edges exactly at the threshold survive.
        let cloud = cloud_from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(2.0, 0.0, 0.0),
            Point3f::new(1.0, 3.0f32.sqrt(), 0.0),
        ]);
        let triangles = [[0, 1, 2]];

        let mesh = prune(&cloud, &triangles, 2.0).unwrap();
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_prune_all_rejected_yields_empty_mesh() {
        let cloud = cloud_from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(10.0, 0.0, 0.0),
            Point3f::new(0.0, 10.0, 0.0),
        ]);
        let triangles = [[0, 1, 2]];

        let mesh = prune(&cloud, &triangles, 1.0).unwrap();
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn test_prune_drops_unreferenced_points() {
        // Vertex 3 appears in no triangle at all and must not survive.
        let cloud = cloud_from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
            Point3f::new(0.5, 0.5, 0.0),
        ]);
        let triangles = [[0, 1, 2]];

        let mesh = prune(&cloud, &triangles, 10.0).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.colors.len(), 3);
    }

    #[test]
    fn test_prune_remap_is_stable_and_dense() {
        // Only the middle vertices survive; renumbering keeps their order.
        let cloud = cloud_from_points(vec![
            Point3f::new(50.0, 50.0, 50.0),
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
            Point3f::new(-50.0, -50.0, -50.0),
        ]);
        let triangles = [[1, 2, 3], [0, 1, 4]];

        let mesh = prune(&cloud, &triangles, 2.0).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.triangles[0], [0, 1, 2]);
        // Colors follow their points through the renumbering.
        assert!((mesh.colors[0][0] - 0.1).abs() < 1e-6);
        assert!((mesh.colors[2][0] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_prune_index_out_of_range_fails() {
        let cloud = cloud_from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
        ]);
        let triangles = [[0, 1, 2]];
        assert!(prune(&cloud, &triangles, 10.0).is_err());
    }

    #[test]
    fn test_prune_no_triangles() {
        let cloud = cloud_from_points(vec![Point3f::new(0.0, 0.0, 0.0)]);
        let mesh = prune(&cloud, &[], 10.0).unwrap();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }
}
