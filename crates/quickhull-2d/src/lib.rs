#![warn(missing_docs)]

//! Gift wrapping (Jarvis march) 2D convex hull, used as the fallback when a
//! 3D point set turns out to be coplanar.
//!
//! Same `clear` / `initialize` / `build` / `iterate` / `hull` capability
//! shape as the 3D engine in `quickhull`, so the facade can switch between
//! them without a trait object or inheritance hierarchy — see
//! `quickhull::Engine`'s internal `Mode` enum.

use quickhull_math::Point2;

/// Incremental gift-wrapping (Jarvis march) convex hull over 2D points.
///
/// Runs in O(n·h) average time, h being the number of hull vertices.
#[derive(Debug, Clone, Default)]
pub struct GiftWrap {
    done: bool,
    iteration_id: i64,
    points: Vec<Point2>,
    hull_point_indices: Vec<usize>,
}

impl GiftWrap {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all internal state.
    pub fn clear(&mut self) {
        self.done = false;
        self.iteration_id = -1;
        self.points.clear();
        self.hull_point_indices.clear();
    }

    /// Initialize with a point set, copying it internally (2D coordinates
    /// are cheap and the projection that produces them is transient).
    ///
    /// Seeds the hull with the lexicographically minimal point (smallest x,
    /// ties broken by smallest y).
    pub fn initialize(&mut self, points: &[Point2]) {
        self.clear();
        self.points = points.to_vec();

        let seed = (0..points.len())
            .min_by(|&a, &b| {
                let pa = points[a];
                let pb = points[b];
                (pa.x(), pa.y())
                    .partial_cmp(&(pb.x(), pb.y()))
                    .expect("non-finite coordinate")
            })
            .expect("initialize called with no points");

        self.hull_point_indices.push(seed);

        // A single point is its own (degenerate) hull.
        if points.len() <= 1 {
            self.done = true;
        }
    }

    /// Run the algorithm to completion. Returns the number of iterations
    /// performed.
    pub fn build(&mut self) -> usize {
        while self.iterate() {}
        (self.iteration_id + 1) as usize
    }

    /// Perform one gift-wrap step. Returns `false` once the hull is closed.
    pub fn iterate(&mut self) -> bool {
        if self.done {
            return false;
        }

        self.iteration_id += 1;

        let p0_idx = *self.hull_point_indices.last().expect("hull has no seed");
        let p0 = self.points[p0_idx];

        let mut p1_idx = (0..self.points.len())
            .find(|&i| i != p0_idx)
            .expect("gift wrap needs at least two points");
        let mut p1 = self.points[p1_idx];
        let mut n01 = (p0.y() - p1.y(), p1.x() - p0.x());

        for i in 0..self.points.len() {
            if i == p0_idx || i == p1_idx {
                continue;
            }

            let p2 = self.points[i];
            let d = n01.0 * (p2.x() - p0.x()) + n01.1 * (p2.y() - p0.y());

            if d == 0.0 {
                // Collinear with the current candidate: keep the further one.
                let v01_len_sq = (p1.x() - p0.x()).powi(2) + (p1.y() - p0.y()).powi(2);
                let v02_len_sq = (p2.x() - p0.x()).powi(2) + (p2.y() - p0.y()).powi(2);
                if v02_len_sq > v01_len_sq {
                    p1_idx = i;
                    p1 = p2;
                }
            } else if d < 0.0 {
                p1_idx = i;
                p1 = p2;
                n01 = (p0.y() - p1.y(), p1.x() - p0.x());
            }
        }

        if p1_idx == self.hull_point_indices[0] {
            self.done = true;
        } else {
            self.hull_point_indices.push(p1_idx);
        }

        true
    }

    /// The ordered index list of points making up the convex hull.
    pub fn hull(&self) -> Vec<usize> {
        self.hull_point_indices.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_hull_visits_all_four_corners() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let mut gw = GiftWrap::new();
        gw.initialize(&pts);
        let iters = gw.build();
        assert_eq!(iters, 4);
        let hull = gw.hull();
        assert_eq!(hull.len(), 4);
        let mut sorted = hull.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn interior_point_is_excluded() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
        ];
        let mut gw = GiftWrap::new();
        gw.initialize(&pts);
        gw.build();
        assert!(!gw.hull().contains(&4));
    }

    #[test]
    fn collinear_points_produce_degenerate_hull() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let mut gw = GiftWrap::new();
        gw.initialize(&pts);
        gw.build();
        assert!(gw.hull().len() <= 2);
    }

    #[test]
    fn single_point_is_its_own_hull() {
        let pts = [Point2::new(3.0, 4.0)];
        let mut gw = GiftWrap::new();
        gw.initialize(&pts);
        let iters = gw.build();
        assert_eq!(iters, 0);
        assert_eq!(gw.hull(), vec![0]);
    }
}
