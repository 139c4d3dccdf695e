#![warn(missing_docs)]

//! Incremental Quickhull over a half-edge manifold.
//!
//! [`Engine`] builds the convex hull of a borrowed `&[Point3]` slice one
//! point at a time: [`Engine::initialize`] seeds a tetrahedron (or detects
//! that the whole input is coplanar and switches to a 2-D gift-wrap
//! fallback), then repeated [`Engine::iterate`] calls fold in the point
//! furthest from whichever face still has one in its outside set, until
//! none do. [`Engine::build`] just runs that loop to completion.
//!
//! The three-crate split below mirrors the three concerns that don't need
//! each other: `quickhull-math` for plane/vector arithmetic, `quickhull-topo`
//! for arena-owned half-edge storage, `quickhull-2d` for the coplanar
//! fallback's Jarvis march. This crate is the only one that knows how to
//! drive them together.
//!
//! # Example
//!
//! ```
//! use quickhull::Engine;
//! use quickhull_math::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ];
//!
//! let mut engine = Engine::new();
//! engine.initialize(&points).unwrap();
//! engine.build().unwrap();
//! assert_eq!(engine.hull().len(), 4);
//! ```

mod driver;
mod mesh_ops;
mod seeder;
mod twod;

use quickhull_math::Point3;
use quickhull_topo::{Arena, FaceId, VertexId};
use quickhull_2d::GiftWrap;
use thiserror::Error;

/// Errors the engine can report. Manifold-invariant violations are not
/// included here — they indicate a defect in the engine itself and panic
/// via [`quickhull_topo::Arena::assert_face_manifold`] in debug builds
/// instead of surfacing as a recoverable `Result`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HullError {
    /// `initialize` needs at least `needed` points but only got `found`
    /// (either under the 3-D minimum of four, or under the 2-D minimum of
    /// three *distinct* points once the input turned out to be coplanar).
    #[error("need at least {needed} points, found {found}")]
    TooFewPoints {
        /// Points actually supplied.
        found: usize,
        /// Minimum required for the path that was attempted.
        needed: usize,
    },
    /// `iterate` or `build` was called without a successful `initialize`.
    #[error("engine has not been initialized")]
    NotInitialized,
}

/// One triangular face of the built hull, as indices into the original
/// input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HullFace {
    /// Index of the face's first vertex in the input point slice.
    pub a: u32,
    /// Index of the face's second vertex in the input point slice.
    pub b: u32,
    /// Index of the face's third vertex in the input point slice.
    pub c: u32,
}

enum Mode {
    /// Seeding hasn't run yet, or the engine was just cleared.
    Empty,
    /// Genuine 3-D hull, built over the half-edge arena.
    Solid {
        stack: Vec<FaceId>,
        iteration_tag: i64,
        anchor_face: FaceId,
    },
    /// Every input point turned out coplanar; delegating to the 2-D engine.
    Coplanar(GiftWrap),
}

/// Incremental convex hull engine.
///
/// Borrows its input point slice for as long as it's initialized — `Engine`
/// does not own or copy the points it's building a hull over.
pub struct Engine<'p> {
    points: Option<&'p [Point3]>,
    arena: Arena,
    vertex_ids: Vec<VertexId>,
    mode: Mode,
}

impl<'p> Default for Engine<'p> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> Engine<'p> {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self {
            points: None,
            arena: Arena::new(),
            vertex_ids: Vec::new(),
            mode: Mode::Empty,
        }
    }

    /// Drop all internal state, forgetting the borrowed point slice.
    pub fn clear(&mut self) {
        self.points = None;
        self.arena.clear();
        self.vertex_ids.clear();
        self.mode = Mode::Empty;
    }

    /// Seed the hull from `points`.
    ///
    /// Requires at least four points; fewer is reported as
    /// [`HullError::TooFewPoints`] and the engine is left cleared. If the
    /// four-plus points are all coplanar, switches internally to the 2-D
    /// fallback, which itself requires at least three distinct points.
    pub fn initialize(&mut self, points: &'p [Point3]) -> Result<(), HullError> {
        self.clear();

        if points.len() < 4 {
            return Err(HullError::TooFewPoints {
                found: points.len(),
                needed: 4,
            });
        }

        self.vertex_ids = (0..points.len()).map(|i| self.arena.new_vertex(i)).collect();

        match seeder::seed(&mut self.arena, points, &self.vertex_ids) {
            seeder::SeedResult::Tetrahedron { stack, anchor_face } => {
                self.points = Some(points);
                self.mode = Mode::Solid {
                    stack,
                    iteration_tag: -1,
                    anchor_face,
                };
            }
            seeder::SeedResult::Coplanar => {
                let distinct = twod::count_distinct(points);
                if distinct < 3 {
                    self.clear();
                    return Err(HullError::TooFewPoints {
                        found: distinct,
                        needed: 3,
                    });
                }
                let projected = twod::project_to_2d(points);
                let mut gift_wrap = GiftWrap::new();
                gift_wrap.initialize(&projected);
                self.points = Some(points);
                self.mode = Mode::Coplanar(gift_wrap);
            }
        }

        Ok(())
    }

    /// Perform one step. Returns `false` once the hull is complete.
    pub fn iterate(&mut self) -> Result<bool, HullError> {
        if self.points.is_none() {
            return Err(HullError::NotInitialized);
        }
        let points = self.points.expect("checked above");

        match &mut self.mode {
            Mode::Empty => Err(HullError::NotInitialized),
            Mode::Coplanar(gift_wrap) => Ok(gift_wrap.iterate()),
            Mode::Solid {
                stack,
                iteration_tag,
                anchor_face,
            } => {
                let mut anchor = Some(*anchor_face);
                let progressed =
                    driver::iterate_once(&mut self.arena, points, stack, iteration_tag, &mut anchor);
                *anchor_face = anchor.expect("solid mode always keeps an anchor face");
                Ok(progressed)
            }
        }
    }

    /// Run [`Engine::iterate`] to completion. Returns the number of
    /// iterations performed.
    pub fn build(&mut self) -> Result<usize, HullError> {
        let mut count = 0;
        while self.iterate()? {
            count += 1;
        }
        Ok(count)
    }

    /// The triangular faces of the current hull (complete, or partial if
    /// called between `iterate` calls), as indices into the input slice.
    ///
    /// Empty before a successful `initialize`.
    pub fn hull(&self) -> Vec<HullFace> {
        match &self.mode {
            Mode::Empty => Vec::new(),
            Mode::Coplanar(gift_wrap) => {
                let ring = gift_wrap.hull();
                if ring.len() <= 2 {
                    return Vec::new();
                }
                let p0 = ring[0] as u32;
                (1..ring.len() - 1)
                    .map(|i| HullFace {
                        a: p0,
                        b: ring[i] as u32,
                        c: ring[i + 1] as u32,
                    })
                    .collect()
            }
            Mode::Solid { anchor_face, .. } => {
                connected_faces(&self.arena, *anchor_face)
                    .into_iter()
                    .map(|f| {
                        let [a, b, c] = self
                            .arena
                            .face_vertices(f)
                            .map(|v| self.arena.vertices[v].point_index as u32);
                        HullFace { a, b, c }
                    })
                    .collect()
            }
        }
    }
}

/// Every face reachable from `start` by crossing a twinned edge — the
/// current live hull, since redistribution severs retired faces from it.
fn connected_faces(arena: &Arena, start: FaceId) -> Vec<FaceId> {
    let mut visited = std::collections::HashSet::new();
    let mut stack = vec![start];
    let mut result = Vec::new();
    visited.insert(start);
    while let Some(f) = stack.pop() {
        result.push(f);
        for adj in arena.adjacent_faces(f).into_iter().flatten() {
            if visited.insert(adj) {
                stack.push(adj);
            }
        }
    }
    result
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
    fn too_few_points_is_reported_without_touching_the_arena() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let mut engine = Engine::new();
        let err = engine.initialize(&points).unwrap_err();
        assert_eq!(err, HullError::TooFewPoints { found: 2, needed: 4 });
        assert!(engine.hull().is_empty());
    }

    #[test]
    fn iterate_before_initialize_is_an_error() {
        let mut engine = Engine::new();
        assert_eq!(engine.iterate().unwrap_err(), HullError::NotInitialized);
    }

    #[test]
    fn unit_tetrahedron_builds_with_zero_iterations() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let mut engine = Engine::new();
        engine.initialize(&points).unwrap();
        let iterations = engine.build().unwrap();
        assert_eq!(iterations, 0);
        assert_eq!(engine.hull().len(), 4);
    }

    #[test]
    fn cube_corners_build_twelve_triangles() {
        let points = cube_points();
        let mut engine = Engine::new();
        engine.initialize(&points).unwrap();
        engine.build().unwrap();
        assert_eq!(engine.hull().len(), 12);
    }

    #[test]
    fn interior_point_never_joins_the_hull() {
        let mut points = cube_points();
        points.push(Point3::new(0.5, 0.5, 0.5));
        let mut engine = Engine::new();
        engine.initialize(&points).unwrap();
        engine.build().unwrap();
        let interior_idx = (points.len() - 1) as u32;
        for face in engine.hull() {
            assert!(face.a != interior_idx && face.b != interior_idx && face.c != interior_idx);
        }
    }

    #[test]
    fn coplanar_square_falls_back_to_2d_and_triangulates() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mut engine = Engine::new();
        engine.initialize(&points).unwrap();
        engine.build().unwrap();
        assert_eq!(engine.hull().len(), 2);
    }

    #[test]
    fn collinear_points_yield_an_empty_hull_not_an_error() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ];
        let mut engine = Engine::new();
        engine.initialize(&points).unwrap();
        engine.build().unwrap();
        assert!(engine.hull().is_empty());
    }

    #[test]
    fn duplicate_coplanar_points_below_three_distinct_is_an_error() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let mut engine = Engine::new();
        let err = engine.initialize(&points).unwrap_err();
        assert_eq!(err, HullError::TooFewPoints { found: 2, needed: 3 });
    }

    #[test]
    fn build_is_idempotent() {
        let points = cube_points();
        let mut engine = Engine::new();
        engine.initialize(&points).unwrap();
        engine.build().unwrap();
        let first = engine.hull();
        let second_iterations = engine.build().unwrap();
        assert_eq!(second_iterations, 0);
        assert_eq!(engine.hull().len(), first.len());
    }
}
