//! Axis Aligned Bounding Box.

use crate::math::{Coord, Point, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Bounds are closed: a box contains its boundary, and two boxes sharing only
/// an edge or a corner still intersect. This matches the touching convention
/// of the collision predicates, so the box can be used as a conservative
/// pre-filter in front of them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Aabb {
    /// The point with the smallest coordinates.
    pub mins: Point,
    /// The point with the largest coordinates.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// The result intersects nothing and merging any box into it yields that
    /// box, which makes it the seed value for merge folds.
    #[inline]
    pub fn new_invalid() -> Aabb {
        Aabb::new(
            Point::new(Coord::MAX, Coord::MAX),
            Point::new(Coord::MIN, Coord::MIN),
        )
    }

    /// Whether `mins <= maxs` on both axes. Only an invalid box (such as the
    /// bounding rectangle of an empty space) fails this.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mins.x <= self.maxs.x && self.mins.y <= self.maxs.y
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.maxs - self.mins
    }

    /// Whether this AABB contains `point`, boundary included.
    #[inline]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.mins.x
            && point.x <= self.maxs.x
            && point.y >= self.mins.y
            && point.y <= self.maxs.y
    }

    /// Whether the two AABBs intersect, shared boundaries included.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.mins.x <= other.maxs.x
            && other.mins.x <= self.maxs.x
            && self.mins.y <= other.maxs.y
            && other.mins.y <= self.maxs.y
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::new(
            Point::new(self.mins.x.min(other.mins.x), self.mins.y.min(other.mins.y)),
            Point::new(self.maxs.x.max(other.maxs.x), self.maxs.y.max(other.maxs.y)),
        )
    }

    /// This AABB translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector) -> Aabb {
        Aabb::new(self.mins + shift, self.maxs + shift)
    }
}
