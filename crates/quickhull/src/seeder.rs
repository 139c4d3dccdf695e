//! Build the initial hull: a tetrahedron from four well-separated points,
//! or a signal that the whole input is coplanar and the 2-D fallback should
//! run instead.

use crate::mesh_ops::{create_triangle, extrude_out, face_distance, reverse_face, try_assign_vertex};
use quickhull_math::{Point3, Vec3};
use quickhull_topo::{Arena, FaceId, VertexId};

/// Outcome of seeding: either a live tetrahedron with its initial
/// processing stack, or a verdict that every input point lies on one plane.
pub(crate) enum SeedResult {
    Tetrahedron {
        stack: Vec<FaceId>,
        anchor_face: FaceId,
    },
    Coplanar,
}

/// Find the six axis-extreme points, the longest pair among them, a third
/// point maximizing perpendicular distance to that pair's line, and a
/// fourth maximizing distance to the resulting base plane. Builds and
/// redistributes the resulting tetrahedron, or reports coplanarity.
///
/// `vertex_ids[i]` must be the arena handle created for `points[i]`.
pub(crate) fn seed(arena: &mut Arena, points: &[Point3], vertex_ids: &[VertexId]) -> SeedResult {
    let n = points.len();

    // Six axis-extreme point indices: xmin, xmax, ymin, ymax, zmin, zmax.
    // Ties keep the smaller index, since later candidates only replace the
    // current one on a strict inequality.
    let mut extreme = [0usize; 6];
    for i in 0..n {
        let p = points[i];
        if p.x() < points[extreme[0]].x() {
            extreme[0] = i;
        }
        if p.x() > points[extreme[1]].x() {
            extreme[1] = i;
        }
        if p.y() < points[extreme[2]].y() {
            extreme[2] = i;
        }
        if p.y() > points[extreme[3]].y() {
            extreme[3] = i;
        }
        if p.z() < points[extreme[4]].z() {
            extreme[4] = i;
        }
        if p.z() > points[extreme[5]].z() {
            extreme[5] = i;
        }
    }

    // Longest pair among the six extremes becomes the base edge.
    let mut base_a = extreme[0];
    let mut base_b = extreme[1];
    let mut dmax = 0.0f64;
    for i in 0..5 {
        for j in (i + 1)..6 {
            let d = Vec3::between(points[extreme[i]], points[extreme[j]]).length_squared();
            if d > dmax {
                dmax = d;
                base_a = extreme[i];
                base_b = extreme[j];
            }
        }
    }

    // Third point: furthest (among the extremes) from the base_a/base_b
    // line. Falls back to an arbitrary remaining point if the extreme set
    // collapsed to just those two (e.g. every other point lies on the line).
    let a0 = points[base_a];
    let along = Vec3::between(a0, points[base_b]).normalize();
    let mut third = None;
    let mut dmax2 = 0.0f64;
    for &idx in &extreme {
        if idx == base_a || idx == base_b {
            continue;
        }
        let to_point = Vec3::between(a0, points[idx]);
        let proj = to_point.dot(along);
        let perp = to_point.length_squared() - proj * proj;
        if perp > dmax2 {
            dmax2 = perp;
            third = Some(idx);
        }
    }
    let base_c = third.unwrap_or_else(|| {
        (0..n)
            .find(|&i| i != base_a && i != base_b)
            .expect("seed requires at least three distinct point indices")
    });

    let base = create_triangle(
        arena,
        points,
        vertex_ids[base_a],
        vertex_ids[base_b],
        vertex_ids[base_c],
    );

    // Apex: the point furthest (by absolute signed distance) from the base
    // plane, searched over every input point.
    let mut apex_idx = 0usize;
    let mut apex_dist = 0.0f64;
    for i in 0..n {
        if i == base_a || i == base_b || i == base_c {
            continue;
        }
        let d = face_distance(arena, base, points[i]);
        if d.abs() >= apex_dist.abs() {
            apex_dist = d;
            apex_idx = i;
        }
    }

    if apex_dist == 0.0 {
        return SeedResult::Coplanar;
    }

    if apex_dist > 0.0 {
        reverse_face(arena, base);
    }

    let walls = extrude_out(arena, points, base, vertex_ids[apex_idx]);
    let mut tetra_faces = vec![base];
    tetra_faces.extend(walls);

    for i in 0..n {
        if i == base_a || i == base_b || i == base_c || i == apex_idx {
            continue;
        }
        for &f in &tetra_faces {
            if try_assign_vertex(arena, points, f, vertex_ids[i]) {
                break;
            }
        }
    }

    let stack = tetra_faces
        .iter()
        .copied()
        .filter(|&f| !arena.faces[f].outside.is_empty())
        .collect();

    SeedResult::Tetrahedron {
        stack,
        anchor_face: base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_points() -> Vec<Point3> {
        let mut pts = Vec::new();
        for &x in &[0.0, 1.0] {
            for &y in &[0.0, 1.0] {
                for &z in &[0.0, 1.0] {
                    pts.push(Point3::new(x, y, z));
                }
            }
        }
        pts
    }

    #[test]
    fn cube_corners_seed_a_tetrahedron() {
        let points = cube_points();
        let mut arena = Arena::new();
        let vertex_ids: Vec<_> = (0..points.len()).map(|i| arena.new_vertex(i)).collect();
        match seed(&mut arena, &points, &vertex_ids) {
            SeedResult::Tetrahedron { anchor_face, .. } => {
                arena.assert_face_manifold(anchor_face);
            }
            SeedResult::Coplanar => panic!("a cube is not coplanar"),
        }
    }

    #[test]
    fn a_flat_square_is_reported_coplanar() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mut arena = Arena::new();
        let vertex_ids: Vec<_> = (0..points.len()).map(|i| arena.new_vertex(i)).collect();
        assert!(matches!(
            seed(&mut arena, &points, &vertex_ids),
            SeedResult::Coplanar
        ));
    }

    #[test]
    fn collinear_points_are_reported_coplanar() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ];
        let mut arena = Arena::new();
        let vertex_ids: Vec<_> = (0..points.len()).map(|i| arena.new_vertex(i)).collect();
        assert!(matches!(
            seed(&mut arena, &points, &vertex_ids),
            SeedResult::Coplanar
        ));
    }
}
