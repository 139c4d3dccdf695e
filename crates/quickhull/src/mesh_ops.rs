//! Half-edge mesh surgery: building triangles, and extruding a triangle fan
//! either toward a horizon loop (`extrude_in`) or away from a seed face
//! (`extrude_out`).
//!
//! Every operation here takes the arena and the borrowed point slice
//! explicitly rather than bundling them into a struct — the seeder and the
//! driver are the only callers, and both already hold both by the time they
//! reach here.

use quickhull_math::{Plane, Point3};
use quickhull_topo::{Arena, FaceId, HalfEdgeId, VertexId};

/// Build a triangular face with vertices `a`, `b`, `c` in counter-clockwise
/// order (`a -> b -> c -> a`), and fit its support plane.
pub(crate) fn create_triangle(
    arena: &mut Arena,
    points: &[Point3],
    a: VertexId,
    b: VertexId,
    c: VertexId,
) -> FaceId {
    let face = arena.new_face();
    let edge_a = arena.new_half_edge(b, face);
    let edge_b = arena.new_half_edge(c, face);
    let edge_c = arena.new_half_edge(a, face);
    arena.half_edges[edge_a].next = Some(edge_b);
    arena.half_edges[edge_b].next = Some(edge_c);
    arena.half_edges[edge_c].next = Some(edge_a);
    arena.faces[face].half_edge = Some(edge_a);
    arena.vertices[a].half_edge = Some(edge_a);
    arena.vertices[b].half_edge = Some(edge_b);
    arena.vertices[c].half_edge = Some(edge_c);

    update_support_plane(arena, points, face);
    face
}

/// Recompute `face`'s cached support plane from its current three vertices.
pub(crate) fn update_support_plane(arena: &mut Arena, points: &[Point3], face: FaceId) {
    let [v1, v2, v3] = arena
        .face_vertices(face)
        .map(|v| points[arena.vertices[v].point_index]);
    let plane = Plane::from_points(v1, v2, v3);
    arena.faces[face].normal = plane.normal;
    arena.faces[face].offset = plane.offset;
}

/// Signed distance from `p` to `face`'s cached support plane.
pub(crate) fn face_distance(arena: &Arena, face: FaceId, p: Point3) -> f64 {
    let f = &arena.faces[face];
    Plane {
        normal: f.normal,
        offset: f.offset,
    }
    .distance(p)
}

/// Flip `face`'s winding and support plane in place (used when the seed
/// base triangle turns out to be wound away from the chosen apex).
pub(crate) fn reverse_face(arena: &mut Arena, face: FaceId) {
    let edge3 = arena.faces[face]
        .half_edge
        .expect("face has no bordering edge");
    let edge1 = arena.half_edges[edge3].next.expect("face ring incomplete");
    let edge2 = arena.half_edges[edge1].next.expect("face ring incomplete");

    let v1 = arena.half_edges[edge2].head;
    let v2 = arena.half_edges[edge3].head;
    let v3 = arena.half_edges[edge1].head;

    arena.half_edges[edge3].head = v1;
    arena.half_edges[edge3].next = Some(edge2);
    arena.half_edges[edge2].head = v3;
    arena.half_edges[edge2].next = Some(edge1);
    arena.half_edges[edge1].head = v2;
    arena.half_edges[edge1].next = Some(edge3);

    arena.vertices[v1].half_edge = Some(edge2);
    arena.vertices[v2].half_edge = Some(edge3);
    arena.vertices[v3].half_edge = Some(edge1);

    arena.faces[face].normal = arena.faces[face].normal.scale(-1.0);
    arena.faces[face].offset *= -1.0;
}

/// Try to claim `vertex` into `face`'s outside set. Returns `false` without
/// touching the set if `vertex` is not strictly outside `face`.
///
/// The claimed vertex is prepended when it becomes the new furthest point,
/// otherwise appended — this keeps `outside[0]` the furthest without a
/// separate sort once the driver pops it.
pub(crate) fn try_assign_vertex(
    arena: &mut Arena,
    points: &[Point3],
    face: FaceId,
    vertex: VertexId,
) -> bool {
    let p = points[arena.vertices[vertex].point_index];
    let d = face_distance(arena, face, p);
    if d < 0.0 {
        return false;
    }

    let f = &mut arena.faces[face];
    if d >= f.furthest_distance {
        f.outside.insert(0, vertex);
        f.furthest_distance = d;
    } else {
        f.outside.push(vertex);
    }
    true
}

/// Extrude a triangle fan from `base`'s three edges out to `apex`, closing
/// the initial tetrahedron. Each of `base`'s edges is twinned directly with
/// its new opposite wall.
pub(crate) fn extrude_out(
    arena: &mut Arena,
    points: &[Point3],
    base: FaceId,
    apex: VertexId,
) -> Vec<FaceId> {
    let base_edges = arena.face_half_edges(base);
    let k = base_edges.len();
    let mut faces = Vec::with_capacity(k);
    let mut edge1s = Vec::with_capacity(k);
    let mut edge2s = Vec::with_capacity(k);

    for &e in &base_edges {
        let h_i = arena.half_edges[e].head;
        let next = arena.half_edges[e].next.expect("base ring incomplete");
        let next_next = arena.half_edges[next].next.expect("base ring incomplete");
        let t_i = arena.half_edges[next_next].head;

        let face = arena.new_face();
        let edge1 = arena.new_half_edge(apex, face); // t_i -> apex
        let edge2 = arena.new_half_edge(h_i, face); // apex -> h_i
        let edge3 = arena.new_half_edge(t_i, face); // h_i -> t_i, twin of `e`
        arena.half_edges[edge1].next = Some(edge2);
        arena.half_edges[edge2].next = Some(edge3);
        arena.half_edges[edge3].next = Some(edge1);
        arena.faces[face].half_edge = Some(edge3);

        if arena.vertices[apex].half_edge.is_none() {
            arena.vertices[apex].half_edge = Some(edge2);
        }

        arena.half_edges[e].twin = Some(edge3);
        arena.half_edges[edge3].twin = Some(e);

        update_support_plane(arena, points, face);
        faces.push(face);
        edge1s.push(edge1);
        edge2s.push(edge2);
    }

    sew_fan(arena, &edge1s, &edge2s);
    faces
}

/// Extrude a triangle fan from the `horizon` loop in to `apex`, replacing
/// the retired visible faces. Each horizon edge's *old* twin (on the
/// permanent, non-visible side) is rewired onto the new wall.
pub(crate) fn extrude_in(
    arena: &mut Arena,
    points: &[Point3],
    horizon: &[HalfEdgeId],
    apex: VertexId,
) -> Vec<FaceId> {
    let k = horizon.len();
    let mut faces = Vec::with_capacity(k);
    let mut edge1s = Vec::with_capacity(k);
    let mut edge2s = Vec::with_capacity(k);

    for &e in horizon {
        let h_i = arena.half_edges[e].head;
        let next = arena.half_edges[e].next.expect("horizon edge has no next");
        let next_next = arena.half_edges[next]
            .next
            .expect("horizon edge's face ring incomplete");
        let t_i = arena.half_edges[next_next].head;
        let old_twin = arena.half_edges[e]
            .twin
            .expect("horizon edge must already border a non-visible face");

        let face = arena.new_face();
        let edge1 = arena.new_half_edge(apex, face); // h_i -> apex
        let edge2 = arena.new_half_edge(t_i, face); // apex -> t_i
        let edge3 = arena.new_half_edge(h_i, face); // t_i -> h_i
        arena.half_edges[edge1].next = Some(edge2);
        arena.half_edges[edge2].next = Some(edge3);
        arena.half_edges[edge3].next = Some(edge1);
        arena.faces[face].half_edge = Some(edge3);

        if arena.vertices[apex].half_edge.is_none() {
            arena.vertices[apex].half_edge = Some(edge2);
        }

        arena.half_edges[edge3].twin = Some(old_twin);
        arena.half_edges[old_twin].twin = Some(edge3);

        update_support_plane(arena, points, face);
        faces.push(face);
        edge1s.push(edge1);
        edge2s.push(edge2);
    }

    // edge1/edge2's head/tail roles are swapped relative to `extrude_out`'s
    // (h_i -> apex / apex -> t_i here vs. t_i -> apex / apex -> h_i there),
    // so the seam pairing is mirrored too: previous wedge's edge1 with this
    // wedge's edge2, not the other way around.
    sew_fan(arena, &edge2s, &edge1s);
    faces
}

/// Twin each fan wedge's `edge1` with the previous wedge's `edge2`,
/// wrapping around — the shared seam between consecutive wedges of a fan.
fn sew_fan(arena: &mut Arena, edge1s: &[HalfEdgeId], edge2s: &[HalfEdgeId]) {
    let k = edge1s.len();
    for i in 0..k {
        let prev = (i + k - 1) % k;
        arena.half_edges[edge2s[prev]].twin = Some(edge1s[i]);
        arena.half_edges[edge1s[i]].twin = Some(edge2s[prev]);
    }
}
