#![warn(missing_docs)]

//! Geometry primitives for the quickhull engine.
//!
//! Thin wrappers over [`nalgebra`]'s `Point3`/`Vector3` (and `Point2` for the
//! 2-D fallback), plus the plane and sign types the hull algorithm needs.
//! No allocation, no exact/rational arithmetic — ordinary `f64` throughout,
//! with tolerant comparisons left to the call sites that need them.

use nalgebra::{Point2 as NaPoint2, Point3 as NaPoint3, Vector2 as NaVector2, Vector3 as NaVector3};

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3(pub NaPoint3<f64>);

impl Point3 {
    /// Create a new point from its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(NaPoint3::new(x, y, z))
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z coordinate.
    pub fn z(&self) -> f64 {
        self.0.z
    }
}

/// A free vector in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3(pub NaVector3<f64>);

impl Vec3 {
    /// Create a new vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(NaVector3::new(x, y, z))
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self(NaVector3::zeros())
    }

    /// `b - a` as a free vector.
    pub fn between(a: Point3, b: Point3) -> Self {
        Self(b.0 - a.0)
    }

    /// Dot product.
    pub fn dot(self, other: Vec3) -> f64 {
        self.0.dot(&other.0)
    }

    /// Cross product.
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3(self.0.cross(&other.0))
    }

    /// Squared length.
    pub fn length_squared(self) -> f64 {
        self.0.norm_squared()
    }

    /// Length.
    pub fn length(self) -> f64 {
        self.0.norm()
    }

    /// True if every component is exactly zero.
    pub fn is_zero(self) -> bool {
        self.0.x == 0.0 && self.0.y == 0.0 && self.0.z == 0.0
    }

    /// Normalize to unit length. Returns the zero vector if `self` has
    /// exactly zero length — callers must check [`Vec3::is_zero`] on the
    /// result when a degenerate input is possible.
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            Vec3::zero()
        } else {
            Vec3(self.0 / len)
        }
    }

    /// Scale by a scalar.
    pub fn scale(self, s: f64) -> Vec3 {
        Vec3(self.0 * s)
    }

    /// Component-wise sum.
    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3(self.0 + other.0)
    }
}

/// A point in the 2-D projection plane used by the coplanar fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2(pub NaPoint2<f64>);

impl Point2 {
    /// Create a new 2-D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self(NaPoint2::new(x, y))
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.0.y
    }
}

/// A free vector in the 2-D projection plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2(pub NaVector2<f64>);

impl Vec2 {
    /// Create a new 2-D vector.
    pub fn new(x: f64, y: f64) -> Self {
        Self(NaVector2::new(x, y))
    }

    /// `b - a` as a free vector.
    pub fn between(a: Point2, b: Point2) -> Self {
        Self(b.0 - a.0)
    }

    /// Squared length.
    pub fn length_squared(self) -> f64 {
        self.0.norm_squared()
    }
}

/// The sign of a geometric quantity (a signed distance, a 2D cross product, …).
///
/// Kept for readability at the few call sites that reason about it directly
/// (the seeder's coplanarity check, the gift-wrap turn test); most hot paths
/// compare the raw `f64` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Strictly negative.
    Negative,
    /// Exactly zero.
    Zero,
    /// Strictly positive.
    Positive,
}

impl Sign {
    /// Classify an `f64` by exact comparison against zero.
    #[inline]
    pub fn from_f64(v: f64) -> Self {
        if v > 0.0 {
            Sign::Positive
        } else if v < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// True if positive.
    pub fn is_positive(self) -> bool {
        matches!(self, Sign::Positive)
    }

    /// True if negative.
    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// True if zero.
    pub fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
}

/// A plane in support form `{x : normal . x + offset = 0}`, with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed offset from the origin.
    pub offset: f64,
}

impl Plane {
    /// Build the plane through three points, oriented so the normal is
    /// `normalize(cross(b - a, c - a))`.
    ///
    /// Degenerate (collinear) inputs produce the zero normal; callers must
    /// check [`Vec3::is_zero`] before trusting `distance`.
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Self {
        let normal = Vec3::between(a, b).cross(Vec3::between(a, c)).normalize();
        let offset = -normal.dot(Vec3::new(a.x(), a.y(), a.z()));
        Plane { normal, offset }
    }

    /// Signed distance from `p` to this plane: `normal . p + offset`.
    pub fn distance(&self, p: Point3) -> f64 {
        self.normal.dot(Vec3::new(p.x(), p.y(), p.z())) + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_vector_stays_zero() {
        assert!(Vec3::zero().normalize().is_zero());
    }

    #[test]
    fn cross_product_orthogonal_to_inputs() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let n = a.cross(b);
        assert_eq!(n, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn plane_from_points_distance_sign() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let plane = Plane::from_points(a, b, c);

        assert_eq!(Sign::from_f64(plane.distance(Point3::new(0.0, 0.0, 1.0))), Sign::Positive);
        assert_eq!(Sign::from_f64(plane.distance(Point3::new(0.0, 0.0, -1.0))), Sign::Negative);
        assert!(plane.distance(Point3::new(0.3, 0.3, 0.0)).abs() < 1e-12);
    }

    #[test]
    fn plane_from_collinear_points_has_zero_normal() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);
        assert!(Plane::from_points(a, b, c).normal.is_zero());
    }
}
