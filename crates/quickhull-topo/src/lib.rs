#![warn(missing_docs)]

//! Half-edge arena for the quickhull engine.
//!
//! Arena-based (slotmap) ownership of vertices, half-edges, and triangular
//! faces. The algorithm that mutates this arena (seeding, horizon
//! extraction, fan extrusion) lives in the `quickhull` crate; this crate
//! only owns allocation, destruction, and the handful of adjacency walks
//! that don't need point geometry.
//!
//! Every vertex carries the index of its input point rather than the point
//! itself — the point set is borrowed by the caller for the engine's
//! lifetime and is never owned by the arena.

use quickhull_math::Vec3;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle for a vertex in the arena.
    pub struct VertexId;
    /// Handle for a half-edge in the arena.
    pub struct HalfEdgeId;
    /// Handle for a face in the arena.
    pub struct FaceId;
}

/// A hull vertex: an input point index plus one outgoing half-edge.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Index into the borrowed input point slice.
    pub point_index: usize,
    /// One outgoing half-edge from this vertex (arbitrary choice for traversal).
    pub half_edge: Option<HalfEdgeId>,
}

/// A directed half-edge: points to `head`, borders `face` on its left,
/// continues at `next` (counter-clockwise around `face`), and is paired
/// with `twin` once its neighboring face exists.
#[derive(Debug, Clone)]
pub struct HalfEdge {
    /// Vertex this half-edge points to.
    pub head: VertexId,
    /// Face this half-edge borders.
    pub face: FaceId,
    /// Next half-edge around `face` (counter-clockwise). `None` only
    /// transiently, before the owning triangle has been fully wired.
    pub next: Option<HalfEdgeId>,
    /// Oppositely oriented adjacent half-edge on the neighboring face.
    /// `None` until that neighbor is built.
    pub twin: Option<HalfEdgeId>,
}

/// A triangular hull face: one bordering half-edge, a cached support plane,
/// and the outside set of input points this face can still see.
#[derive(Debug, Clone)]
pub struct Face {
    /// One of the three half-edges bordering this face. `None` only
    /// transiently during construction.
    pub half_edge: Option<HalfEdgeId>,
    /// Cached unit outward normal of the support plane.
    pub normal: Vec3,
    /// Cached support-plane offset (`{x : normal . x + offset = 0}`).
    pub offset: f64,
    /// Vertices lying in this face's positive half-space, furthest first.
    pub outside: Vec<VertexId>,
    /// Signed distance of `outside[0]`, or `f64::NEG_INFINITY` if empty.
    pub furthest_distance: f64,
    /// Iteration identifier this face was last tagged with during flood-fill.
    pub iteration_tag: i64,
}

/// Arena owning all vertices, half-edges, and faces of a hull in progress.
///
/// Retired (no-longer-hull) faces are never removed mid-build — their slots
/// stay allocated so handles held elsewhere in the algorithm remain valid.
/// Only [`Arena::clear`] tears the whole structure down.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    /// All vertices, one per input point, created once at initialization.
    pub vertices: SlotMap<VertexId, Vertex>,
    /// All half-edges ever allocated, including those of retired faces.
    pub half_edges: SlotMap<HalfEdgeId, HalfEdge>,
    /// All faces ever allocated, including retired ones.
    pub faces: SlotMap<FaceId, Face>,
}

impl Arena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            half_edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
        }
    }

    /// Destroy all arena contents.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.half_edges.clear();
        self.faces.clear();
    }

    /// Allocate a vertex for the given input point index.
    pub fn new_vertex(&mut self, point_index: usize) -> VertexId {
        self.vertices.insert(Vertex {
            point_index,
            half_edge: None,
        })
    }

    /// Allocate a half-edge pointing to `head` and bordering `face`.
    /// `next` and `twin` start unset.
    pub fn new_half_edge(&mut self, head: VertexId, face: FaceId) -> HalfEdgeId {
        self.half_edges.insert(HalfEdge {
            head,
            face,
            next: None,
            twin: None,
        })
    }

    /// Allocate an empty face: no bordering edge yet, empty outside set,
    /// iteration tag `-1`.
    pub fn new_face(&mut self) -> FaceId {
        self.faces.insert(Face {
            half_edge: None,
            normal: Vec3::zero(),
            offset: 0.0,
            outside: Vec::new(),
            furthest_distance: f64::NEG_INFINITY,
            iteration_tag: -1,
        })
    }

    /// The three half-edges bordering `face`, in counter-clockwise order.
    pub fn face_half_edges(&self, face: FaceId) -> [HalfEdgeId; 3] {
        let e0 = self.faces[face].half_edge.expect("face has no bordering edge");
        let e1 = self.half_edges[e0].next.expect("face ring incomplete");
        let e2 = self.half_edges[e1].next.expect("face ring incomplete");
        [e0, e1, e2]
    }

    /// The three vertices of `face`, in counter-clockwise order.
    pub fn face_vertices(&self, face: FaceId) -> [VertexId; 3] {
        self.face_half_edges(face).map(|e| self.half_edges[e].head)
    }

    /// The face on the other side of `edge`'s twin, if the twin is set.
    pub fn opposite_face(&self, edge: HalfEdgeId) -> Option<FaceId> {
        self.half_edges[edge]
            .twin
            .map(|twin| self.half_edges[twin].face)
    }

    /// The three faces adjacent to `face` across each of its edges, in the
    /// same order as [`Arena::face_half_edges`]. `None` where the
    /// corresponding edge has no twin yet.
    pub fn adjacent_faces(&self, face: FaceId) -> [Option<FaceId>; 3] {
        self.face_half_edges(face).map(|e| self.opposite_face(e))
    }

    /// Panic if `face`'s ring is not a circular triple, or if any of its
    /// edges has a twin that doesn't point back or doesn't land on the
    /// matching vertex (spec invariant P3). Debug/test tooling only — a
    /// failure here is a programming defect, never a recoverable input
    /// error.
    pub fn assert_face_manifold(&self, face: FaceId) {
        let edges = self.face_half_edges(face);
        for &e in &edges {
            assert_eq!(
                self.half_edges[e].face, face,
                "half-edge does not border its own face"
            );
            if let Some(twin) = self.half_edges[e].twin {
                assert_eq!(
                    self.half_edges[twin].twin,
                    Some(e),
                    "twin pairing is not symmetrical"
                );
                assert_ne!(
                    self.half_edges[twin].face, face,
                    "twin borders the same face"
                );
                let tail = self.half_edges[self.half_edges[e].next.expect("face ring incomplete")]
                    .next
                    .map(|nn| self.half_edges[nn].head)
                    .expect("face ring incomplete");
                assert_eq!(
                    self.half_edges[twin].head, tail,
                    "twin does not point back to e's tail vertex"
                );
            } else {
                panic!("half-edge has no twin");
            }
        }
    }
}
