//! Geometric filtering of scan clouds

use rayon::prelude::*;
use scanmesh_core::{Aabb, ScanCloud};

/// Bounding-box crop
///
/// Keeps only the samples whose 3D point lies inside `bounds` (all six
/// limits inclusive). The four parallel arrays of the cloud are filtered
/// with the identical retained-index set, in original order, so index
/// alignment is preserved. An empty result is valid output, not an error.
///
/// # Example
/// ```rust
/// use scanmesh_core::{Aabb, Point3f, Point2f, ScanCloud};
/// use scanmesh_cleanup::crop_to_box;
///
/// let mut cloud = ScanCloud::new();
/// cloud.push(Point3f::new(0.0, 0.0, 0.0), [0.5, 0.5, 0.5],
///            Point2f::new(0.0, 0.0), Point2f::new(0.0, 0.0));
/// cloud.push(Point3f::new(5.0, 5.0, 5.0), [0.5, 0.5, 0.5],
///            Point2f::new(1.0, 0.0), Point2f::new(1.0, 0.0));
///
/// let cropped = crop_to_box(&cloud, &Aabb::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0));
/// assert_eq!(cropped.len(), 1);
/// ```
pub fn crop_to_box(cloud: &ScanCloud, bounds: &Aabb) -> ScanCloud {
    if cloud.is_empty() {
        return ScanCloud::new();
    }

    // Membership is per-sample independent, so the test itself can run in
    // parallel; the collected mask preserves index order.
    let inside: Vec<bool> = cloud
        .points
        .par_iter()
        .map(|p| bounds.contains(p))
        .collect();

    let mut cropped = ScanCloud::with_capacity(inside.iter().filter(|&&k| k).count());
    for (i, keep) in inside.iter().enumerate() {
        if *keep {
            cropped.push(
                cloud.points[i],
                cloud.colors[i],
                cloud.proj_left[i],
                cloud.proj_right[i],
            );
        }
    }
    cropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanmesh_core::{Point2f, Point3f};

    fn cloud_from_points(points: Vec<Point3f>) -> ScanCloud {
        let n = points.len();
        let colors = (0..n).map(|i| [i as f32, 0.0, 0.0]).collect();
        let left = (0..n).map(|i| Point2f::new(i as f32, 0.0)).collect();
        let right = (0..n).map(|i| Point2f::new(i as f32, 1.0)).collect();
        ScanCloud::from_parts(points, colors, left, right).unwrap()
    }

    #[test]
    fn test_crop_empty_cloud() {
        let cloud = ScanCloud::new();
        let cropped = crop_to_box(&cloud, &Aabb::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0));
        assert!(cropped.is_empty());
    }

    #[test]
    fn test_crop_unit_box() {
        let cloud = cloud_from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(5.0, 5.0, 5.0),
        ]);

        let cropped = crop_to_box(&cloud, &Aabb::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0));
        assert_eq!(cropped.len(), 1);
        assert_eq!(cropped.points[0], Point3f::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_crop_keeps_attributes_aligned() {
        let cloud = cloud_from_points(vec![
            Point3f::new(10.0, 0.0, 0.0),
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(0.5, 0.5, 0.5),
        ]);

        let cropped = crop_to_box(&cloud, &Aabb::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0));
        assert_eq!(cropped.len(), 2);
        // Survivors are original indices 1 and 2, in order, across all arrays.
        assert_eq!(cropped.colors[0][0], 1.0);
        assert_eq!(cropped.colors[1][0], 2.0);
        assert_eq!(cropped.proj_left[0], Point2f::new(1.0, 0.0));
        assert_eq!(cropped.proj_right[1], Point2f::new(2.0, 1.0));
    }

    #[test]
    fn test_crop_boundary_points_kept() {
        let cloud = cloud_from_points(vec![Point3f::new(1.0, -1.0, 1.0)]);
        let cropped = crop_to_box(&cloud, &Aabb::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0));
        assert_eq!(cropped.len(), 1);
    }

    #[test]
    fn test_crop_all_outside() {
        let cloud = cloud_from_points(vec![
            Point3f::new(2.0, 0.0, 0.0),
            Point3f::new(0.0, -3.0, 0.0),
        ]);
        let cropped = crop_to_box(&cloud, &Aabb::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0));
        assert!(cropped.is_empty());
    }
}
