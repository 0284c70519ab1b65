use std::cmp::Ordering;

use crate::query::Overlap;
use crate::shape::{Circle, Segment};
use crate::utils;

/// Overlap test between a circle and a line segment.
///
/// Works on the triangle formed by the segment endpoints `A`, `B` and the
/// circle center `C`. The law-of-cosines terms at `A` and `B` locate the foot
/// of the altitude dropped from `C`: a negative term puts the foot outside
/// the segment, past that endpoint, and the endpoint distance decides. When
/// the foot falls within the segment, the altitude — recovered from the
/// triangle's area via Heron's formula — is measured against the radius.
///
/// Every comparison is carried out on squared integer lengths, so touching
/// configurations classify exactly.
pub fn overlap_circle_segment(circle: &Circle, segment: &Segment) -> Overlap {
    let radius2 = i64::from(circle.radius) * i64::from(circle.radius);
    let ac2 = utils::distance_squared(&circle.center, &segment.a);
    let cb2 = utils::distance_squared(&circle.center, &segment.b);
    let ba2 = segment.length_squared();

    // Degenerate segment: a point-in-circle test.
    if ba2 == 0 {
        return Overlap::from_squared(ac2, radius2);
    }

    // 2·AB·AC·cos(A) and 2·AB·BC·cos(B), by the law of cosines.
    let leg_a = ac2 + ba2 - cb2;
    let leg_b = cb2 + ba2 - ac2;
    if leg_a < 0 {
        return Overlap::from_squared(ac2, radius2);
    }
    if leg_b < 0 {
        return Overlap::from_squared(cb2, radius2);
    }

    // The foot lies on the segment: compare the altitude h = 2·area/AB with
    // the radius. Heron's formula gives 16·area² = 4·AC²·AB² − leg_a², so
    // h <= r reduces to 4·AC²·AB² − leg_a² <= 4·r²·AB², entirely in
    // integers.
    let area16 = 4 * i128::from(ac2) * i128::from(ba2) - i128::from(leg_a) * i128::from(leg_a);
    match area16.cmp(&(4 * i128::from(radius2) * i128::from(ba2))) {
        Ordering::Greater => Overlap::Separated,
        Ordering::Equal => Overlap::Touching,
        Ordering::Less => Overlap::Penetrating,
    }
}
