//! Projects a coplanar (or collinear) 3-D point set into the 2-D plane it
//! lies on, so [`quickhull_2d::GiftWrap`] can take over from the seeder.

use quickhull_math::{Point2, Point3, Vec3};
use std::collections::HashSet;

/// Build an orthonormal in-plane basis `(u, w)` from the first point and
/// the first later point not collinear with `points[0] -> points[1]`, then
/// project every point onto it.
///
/// If every point is collinear (no such basis point exists), `w` stays the
/// zero vector and every projection collapses onto the `u` axis — the gift
/// wrap then degenerates to a hull of at most two points, which is the
/// desired outcome rather than a special case.
pub(crate) fn project_to_2d(points: &[Point3]) -> Vec<Point2> {
    let origin = points[0];
    let u_raw = Vec3::between(origin, points[1]);
    let u = u_raw.normalize();

    let mut n = Vec3::zero();
    for &p in &points[2..] {
        let candidate = u_raw.cross(Vec3::between(origin, p));
        if !candidate.is_zero() {
            n = candidate.normalize();
            break;
        }
    }
    let w = u.cross(n);

    points
        .iter()
        .map(|&p| {
            let rel = Vec3::between(origin, p);
            Point2::new(u.dot(rel), w.dot(rel))
        })
        .collect()
}

/// Count distinct points by exact coordinate equality.
pub(crate) fn count_distinct(points: &[Point3]) -> usize {
    let mut seen = HashSet::new();
    for p in points {
        seen.insert((p.x().to_bits(), p.y().to_bits(), p.z().to_bits()));
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_square_projects_to_a_planar_quad() {
        let points = [
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(1.0, 0.0, 5.0),
            Point3::new(1.0, 1.0, 5.0),
            Point3::new(0.0, 1.0, 5.0),
        ];
        let flat = project_to_2d(&points);
        // All on z = 5, so the in-plane coordinates should reproduce a unit
        // square up to the chosen basis (origin at points[0]).
        assert_eq!(flat[0], Point2::new(0.0, 0.0));
        assert!((flat[1].x() - 1.0).abs() < 1e-12);
        assert!(flat[1].y().abs() < 1e-12);
    }

    #[test]
    fn collinear_points_collapse_onto_one_axis() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let flat = project_to_2d(&points);
        for p in &flat {
            assert!(p.y().abs() < 1e-12);
        }
    }

    #[test]
    fn count_distinct_collapses_duplicates() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        assert_eq!(count_distinct(&points), 2);
    }
}
