//! The incremental loop: pop the next claimed face, flood-fill the set of
//! faces visible from its furthest point, extrude a new fan in to replace
//! them, and redistribute the orphaned outside sets.

use crate::mesh_ops::{extrude_in, face_distance, try_assign_vertex};
use quickhull_math::Point3;
use quickhull_topo::{Arena, FaceId, HalfEdgeId, VertexId};

/// Run one iteration. Returns `false` (and leaves the arena untouched) once
/// every face's outside set is empty.
pub(crate) fn iterate_once(
    arena: &mut Arena,
    points: &[Point3],
    stack: &mut Vec<FaceId>,
    iteration_tag: &mut i64,
    anchor_face: &mut Option<FaceId>,
) -> bool {
    let face = loop {
        match stack.pop() {
            None => return false,
            Some(f) if !arena.faces[f].outside.is_empty() => break f,
            Some(_) => continue, // stale entry: redistribution already emptied it
        }
    };

    *iteration_tag += 1;
    let tag = *iteration_tag;

    let furthest_vertex = arena.faces[face].outside.remove(0);
    let furthest_point = points[arena.vertices[furthest_vertex].point_index];

    arena.faces[face].iteration_tag = tag;
    let mut visible = vec![face];
    flood_fill_visible(arena, tag, face, furthest_point, &mut visible);

    let horizon = extract_horizon(arena, tag, &visible);
    let new_faces = extrude_in(arena, points, &horizon, furthest_vertex);

    for &old_face in &visible {
        let orphaned = std::mem::take(&mut arena.faces[old_face].outside);
        for v in orphaned {
            for &nf in &new_faces {
                if try_assign_vertex(arena, points, nf, v) {
                    break;
                }
            }
        }
    }

    for &nf in &new_faces {
        if !arena.faces[nf].outside.is_empty() {
            stack.push(nf);
        }
    }

    *anchor_face = new_faces.first().copied().or(*anchor_face);

    #[cfg(debug_assertions)]
    for &nf in &new_faces {
        arena.assert_face_manifold(nf);
    }

    true
}

/// Recursively tag and collect every face reachable from `face` across an
/// edge whose neighbor is also above `p`'s plane (strictly, no tolerance —
/// see the crate-level docs for why this is deliberate).
fn flood_fill_visible(
    arena: &mut Arena,
    tag: i64,
    face: FaceId,
    p: Point3,
    visible: &mut Vec<FaceId>,
) {
    for adj in arena.adjacent_faces(face).into_iter().flatten() {
        if arena.faces[adj].iteration_tag != tag && face_distance(arena, adj, p) > 0.0 {
            arena.faces[adj].iteration_tag = tag;
            visible.push(adj);
            flood_fill_visible(arena, tag, adj, p, visible);
        }
    }
}

/// Walk from `edge`'s twin, crossing into the next face's far edge each time
/// the current face is still not visible, until it turns onto a face tagged
/// visible — the next horizon edge.
fn next_horizon_edge(arena: &Arena, tag: i64, edge: HalfEdgeId) -> HalfEdgeId {
    let mut e = arena.half_edges[edge].twin.expect("horizon edge must have a twin");
    while arena.faces[arena.half_edges[e].face].iteration_tag != tag {
        let next = arena.half_edges[e].next.expect("visible face ring incomplete");
        let next_next = arena.half_edges[next]
            .next
            .expect("visible face ring incomplete");
        e = arena.half_edges[next_next]
            .twin
            .expect("visible face edge must have a twin");
    }
    e
}

/// Any half-edge belonging to the visible set whose twin borders a
/// non-visible face — a starting point for the horizon walk.
fn find_start_horizon_edge(arena: &Arena, tag: i64, visible: &[FaceId]) -> HalfEdgeId {
    for &f in visible {
        for e in arena.face_half_edges(f) {
            let twin = arena.half_edges[e].twin.expect("live edge must have a twin");
            if arena.faces[arena.half_edges[twin].face].iteration_tag != tag {
                return e;
            }
        }
    }
    panic!("visible face set has no horizon boundary");
}

/// The ordered, closed loop of horizon edges bounding `visible`.
fn extract_horizon(arena: &Arena, tag: i64, visible: &[FaceId]) -> Vec<HalfEdgeId> {
    let start = find_start_horizon_edge(arena, tag, visible);
    let mut loop_edges = vec![start];
    let mut current = start;
    loop {
        let next = next_horizon_edge(arena, tag, current);
        if next == start {
            break;
        }
        loop_edges.push(next);
        current = next;
    }
    loop_edges
}
