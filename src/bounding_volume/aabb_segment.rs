use crate::bounding_volume::Aabb;
use crate::math::Point;
use crate::shape::Segment;

/// Computes the Axis-Aligned Bounding Box of a segment.
#[inline]
pub fn segment_aabb(segment: &Segment) -> Aabb {
    Aabb::new(
        Point::new(segment.a.x.min(segment.b.x), segment.a.y.min(segment.b.y)),
        Point::new(segment.a.x.max(segment.b.x), segment.a.y.max(segment.b.y)),
    )
}

impl Segment {
    /// Computes the AABB of this segment.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        segment_aabb(self)
    }
}
