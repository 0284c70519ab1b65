use std::cmp::Ordering;
use std::ptr;

use crate::math::Vector;
use crate::query::Unsupported;
use crate::shape::{Shape, ShapeKind, Space};

use super::{
    overlap_circle_circle, overlap_circle_rect, overlap_circle_segment, overlap_rect_rect,
};

/// The degree of overlap between two shapes.
///
/// Variants are ordered by increasing contact, so the overlap of a compound
/// is the maximum over its members.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Overlap {
    /// The shapes do not touch.
    Separated,
    /// The shapes touch exactly at their boundaries, without their
    /// interiors overlapping.
    Touching,
    /// The shapes' interiors overlap.
    Penetrating,
}

impl Overlap {
    /// Whether the shapes touch or overlap.
    ///
    /// Touching counts as colliding: all predicate thresholds are `<=`.
    #[inline]
    pub fn is_colliding(self) -> bool {
        !matches!(self, Overlap::Separated)
    }

    /// Whether the shapes' interiors overlap. Touching is not yet
    /// penetrating, which is what lets the resolver stop a move exactly at
    /// an obstacle's boundary.
    #[inline]
    pub fn is_penetrating(self) -> bool {
        matches!(self, Overlap::Penetrating)
    }

    /// Classifies a squared distance against a squared contact threshold.
    #[inline]
    pub(crate) fn from_squared(distance: i64, threshold: i64) -> Overlap {
        match distance.cmp(&threshold) {
            Ordering::Greater => Overlap::Separated,
            Ordering::Equal => Overlap::Touching,
            Ordering::Less => Overlap::Penetrating,
        }
    }
}

/// Classifies the overlap between two shapes at their current positions.
///
/// Returns `Err(Unsupported)` for a pairing with no geometric rule
/// (rectangle–segment, segment–segment).
pub fn overlap(shape1: &Shape, shape2: &Shape) -> Result<Overlap, Unsupported> {
    overlap_shifted(shape1, &Vector::zeros(), shape2, &Vector::zeros())
}

/// Classifies the overlap between two shapes as if `shape1` had already
/// moved by `shift1`.
///
/// Neither shape is mutated: the rule runs against translated copies of the
/// positions, so the swept test is observably pure on every path.
pub fn overlap_at(
    shape1: &Shape,
    shift1: &Vector,
    shape2: &Shape,
) -> Result<Overlap, Unsupported> {
    overlap_shifted(shape1, shift1, shape2, &Vector::zeros())
}

/// Tests whether two shapes are intersecting (overlapping or touching).
pub fn intersection_test(shape1: &Shape, shape2: &Shape) -> Result<bool, Unsupported> {
    overlap(shape1, shape2).map(Overlap::is_colliding)
}

/// Tests whether two shapes would intersect after `shape1` moves by
/// `shift1`, without moving it.
pub fn intersection_test_at(
    shape1: &Shape,
    shift1: &Vector,
    shape2: &Shape,
) -> Result<bool, Unsupported> {
    overlap_at(shape1, shift1, shape2).map(Overlap::is_colliding)
}

pub(crate) fn overlap_shifted(
    shape1: &Shape,
    shift1: &Vector,
    shape2: &Shape,
    shift2: &Vector,
) -> Result<Overlap, Unsupported> {
    match (shape1.kind(), shape2.kind()) {
        (ShapeKind::Space(space), _) => Ok(overlap_space_shifted(space, shift1, shape2, shift2)),
        (_, ShapeKind::Space(space)) => Ok(overlap_space_shifted(space, shift2, shape1, shift1)),
        (ShapeKind::Circle(c1), ShapeKind::Circle(c2)) => Ok(overlap_circle_circle(
            &c1.translated(shift1),
            &c2.translated(shift2),
        )),
        (ShapeKind::Circle(circle), ShapeKind::Rect(rect)) => Ok(overlap_circle_rect(
            &circle.translated(shift1),
            &rect.translated(shift2),
        )),
        (ShapeKind::Rect(rect), ShapeKind::Circle(circle)) => Ok(overlap_circle_rect(
            &circle.translated(shift2),
            &rect.translated(shift1),
        )),
        (ShapeKind::Circle(circle), ShapeKind::Segment(segment)) => Ok(overlap_circle_segment(
            &circle.translated(shift1),
            &segment.translated(shift2),
        )),
        (ShapeKind::Segment(segment), ShapeKind::Circle(circle)) => Ok(overlap_circle_segment(
            &circle.translated(shift2),
            &segment.translated(shift1),
        )),
        (ShapeKind::Rect(r1), ShapeKind::Rect(r2)) => Ok(overlap_rect_rect(
            &r1.translated(shift1),
            &r2.translated(shift2),
        )),
        // Rectangle–segment and segment–segment have no geometric rule.
        (ShapeKind::Rect(_), ShapeKind::Segment(_))
        | (ShapeKind::Segment(_), ShapeKind::Rect(_))
        | (ShapeKind::Segment(_), ShapeKind::Segment(_)) => Err(Unsupported),
    }
}

// Broadcast over the members of a space, skipping the identity member: a
// shape never collides with itself. Member pairings without a rule warn in
// place and count as separated, matching the degradation policy of the
// boolean surface.
fn overlap_space_shifted(
    space: &Space,
    space_shift: &Vector,
    other: &Shape,
    other_shift: &Vector,
) -> Overlap {
    let mut best = Overlap::Separated;

    for member in space.shapes() {
        let shape = member.borrow();
        if ptr::eq::<Shape>(&*shape, other) {
            continue;
        }
        match overlap_shifted(&shape, space_shift, other, other_shift) {
            Ok(Overlap::Penetrating) => return Overlap::Penetrating,
            Ok(overlap) => best = best.max(overlap),
            Err(Unsupported) => warn_unsupported(&shape, other),
        }
    }

    best
}

pub(crate) fn warn_unsupported(shape1: &Shape, shape2: &Shape) {
    log::warn!(
        "no collision test between a {} and a {}; treating the pair as not colliding",
        shape1.kind().name(),
        shape2.kind().name()
    );
}
