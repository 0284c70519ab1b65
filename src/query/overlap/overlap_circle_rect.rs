use crate::math::Point;
use crate::query::Overlap;
use crate::shape::{Circle, Rect};
use crate::utils;

/// Overlap test between a circle and an axis-aligned rectangle.
///
/// The closest point of the rectangle to the circle's center is obtained by
/// clamping the center to the rectangle's bounds, and the squared distance to
/// that point is classified against the squared radius. A center inside the
/// rectangle clamps to itself (distance zero), so a circle wholly contained
/// in the rectangle penetrates.
#[inline]
pub fn overlap_circle_rect(circle: &Circle, rect: &Rect) -> Overlap {
    let maxs = rect.maxs();
    let closest = Point::new(
        circle.center.x.clamp(rect.pos.x, maxs.x),
        circle.center.y.clamp(rect.pos.y, maxs.y),
    );
    let distance2 = utils::distance_squared(&circle.center, &closest);

    if distance2 == 0 {
        // The center lies on or inside the rectangle. Only a zero-radius
        // circle sitting exactly on the boundary is a mere touch; anything
        // else has interior overlap.
        let on_boundary = circle.center.x == rect.pos.x
            || circle.center.x == maxs.x
            || circle.center.y == rect.pos.y
            || circle.center.y == maxs.y;
        if on_boundary && circle.radius == 0 {
            Overlap::Touching
        } else {
            Overlap::Penetrating
        }
    } else {
        let radius2 = i64::from(circle.radius) * i64::from(circle.radius);
        Overlap::from_squared(distance2, radius2)
    }
}
