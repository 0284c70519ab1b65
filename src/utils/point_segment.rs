use crate::math::Point;
use crate::shape::Segment;

/// Computes the squared distance from `pt` to the closest point of `segment`,
/// by direct projection.
///
/// The point is projected onto the segment's support line and clamped to the
/// endpoints when the projection falls outside the segment. This is the
/// reference formula against which the triangle-based circle/segment rule is
/// validated numerically.
pub fn point_segment_distance_squared(pt: &Point, segment: &Segment) -> f64 {
    let ab = segment.scaled_direction().cast::<f64>();
    let ap = (pt - segment.a).cast::<f64>();
    let ab_ap = ab.dot(&ap);
    let sqnab = ab.norm_squared();

    if ab_ap <= 0.0 {
        // Voronoï region of vertex 'a'.
        ap.norm_squared()
    } else if ab_ap >= sqnab {
        // Voronoï region of vertex 'b'.
        (pt - segment.b).cast::<f64>().norm_squared()
    } else {
        // Voronoï region of the segment interior.
        ap.norm_squared() - ab_ap * ab_ap / sqnab
    }
}
