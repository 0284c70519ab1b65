use crate::math::{Coord, Point, Vector};

/// A circle shape, positioned by its center.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Circle {
    /// The center of the circle.
    pub center: Point,
    /// The radius of the circle. Never negative.
    pub radius: Coord,
}

impl Circle {
    /// Creates a new circle from its center and radius.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative.
    #[inline]
    pub fn new(center: Point, radius: Coord) -> Circle {
        assert!(radius >= 0, "the radius of a circle cannot be negative");
        Circle { center, radius }
    }

    /// This circle translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector) -> Circle {
        Circle {
            center: self.center + shift,
            radius: self.radius,
        }
    }
}
