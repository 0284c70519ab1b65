use crate::bounding_volume::Aabb;
use crate::math::Vector;
use crate::shape::Circle;

/// Computes the Axis-Aligned Bounding Box of a circle.
#[inline]
pub fn circle_aabb(circle: &Circle) -> Aabb {
    Aabb::new(
        circle.center + Vector::repeat(-circle.radius),
        circle.center + Vector::repeat(circle.radius),
    )
}

impl Circle {
    /// Computes the AABB of this circle.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        circle_aabb(self)
    }
}
