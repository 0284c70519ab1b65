use crate::query::Overlap;
use crate::shape::Circle;
use crate::utils;

/// Overlap test between two circles.
///
/// The circles collide iff the distance between their centers is at most the
/// sum of their radii; exact equality is [`Overlap::Touching`].
#[inline]
pub fn overlap_circle_circle(circle1: &Circle, circle2: &Circle) -> Overlap {
    let distance2 = utils::distance_squared(&circle1.center, &circle2.center);
    let sum_radius = i64::from(circle1.radius) + i64::from(circle2.radius);
    Overlap::from_squared(distance2, sum_radius * sum_radius)
}
