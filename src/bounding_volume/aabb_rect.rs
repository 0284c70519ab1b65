use crate::bounding_volume::Aabb;
use crate::shape::Rect;

/// Computes the Axis-Aligned Bounding Box of a rectangle.
#[inline]
pub fn rect_aabb(rect: &Rect) -> Aabb {
    Aabb::new(rect.pos, rect.maxs())
}

impl Rect {
    /// Computes the AABB of this rectangle.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        rect_aabb(self)
    }
}
