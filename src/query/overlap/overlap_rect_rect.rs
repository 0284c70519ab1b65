use crate::query::Overlap;
use crate::shape::Rect;

/// Overlap test between two axis-aligned rectangles: interval overlap on
/// both axes. A shared edge or corner is [`Overlap::Touching`].
#[inline]
pub fn overlap_rect_rect(rect1: &Rect, rect2: &Rect) -> Overlap {
    let maxs1 = rect1.maxs();
    let maxs2 = rect2.maxs();

    // Per-axis overlap length: zero is edge contact, negative is a gap.
    let x = i64::from(maxs1.x.min(maxs2.x)) - i64::from(rect1.pos.x.max(rect2.pos.x));
    let y = i64::from(maxs1.y.min(maxs2.y)) - i64::from(rect1.pos.y.max(rect2.pos.y));

    if x < 0 || y < 0 {
        Overlap::Separated
    } else if x == 0 || y == 0 {
        Overlap::Touching
    } else {
        Overlap::Penetrating
    }
}
