use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::bounding_volume::Aabb;
use crate::math::{Coord, Point, Vector};
use crate::query;
use crate::shape::{Circle, Rect, Segment, Space};

/// The closed set of shape variants understood by the collision matrix.
///
/// Dispatch over pairs of variants is an exhaustive `match`, so adding a
/// variant surfaces every pairing that still needs a rule at compile time.
#[derive(Debug)]
pub enum ShapeKind {
    /// A circle, positioned by its center.
    Circle(Circle),
    /// An axis-aligned rectangle, positioned by its minimum corner.
    Rect(Rect),
    /// A finite line segment.
    Segment(Segment),
    /// A space of other shapes behaving as one compound shape.
    Space(Space),
}

impl ShapeKind {
    /// A short name for the variant, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Rect(_) => "rectangle",
            ShapeKind::Segment(_) => "segment",
            ShapeKind::Space(_) => "space",
        }
    }
}

/// A positioned geometric entity carrying a tag list and an optional opaque
/// user payload.
///
/// For the [`ShapeKind::Space`] variant, singular accessors (position, tags,
/// payload) delegate to the space's first member — its root — while mutators
/// broadcast to every member.
pub struct Shape {
    kind: ShapeKind,
    tags: Vec<String>,
    data: Option<Rc<dyn Any>>,
}

impl Shape {
    /// Creates a shape from a variant.
    pub fn new(kind: ShapeKind) -> Shape {
        Shape {
            kind,
            tags: Vec::new(),
            data: None,
        }
    }

    /// Creates a circle shape.
    pub fn circle(center: Point, radius: Coord) -> Shape {
        Shape::new(ShapeKind::Circle(Circle::new(center, radius)))
    }

    /// Creates an axis-aligned rectangle shape.
    pub fn rect(pos: Point, extents: Vector) -> Shape {
        Shape::new(ShapeKind::Rect(Rect::new(pos, extents)))
    }

    /// Creates a segment shape.
    pub fn segment(a: Point, b: Point) -> Shape {
        Shape::new(ShapeKind::Segment(Segment::new(a, b)))
    }

    /// Creates a compound shape from a space.
    pub fn space(space: Space) -> Shape {
        Shape::new(ShapeKind::Space(space))
    }

    /// The shape variant.
    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// The shape variant, mutably.
    #[inline]
    pub fn kind_mut(&mut self) -> &mut ShapeKind {
        &mut self.kind
    }

    /// This shape as a circle, if it is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        match &self.kind {
            ShapeKind::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    /// This shape as a rectangle, if it is one.
    pub fn as_rect(&self) -> Option<&Rect> {
        match &self.kind {
            ShapeKind::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    /// This shape as a segment, if it is one.
    pub fn as_segment(&self) -> Option<&Segment> {
        match &self.kind {
            ShapeKind::Segment(segment) => Some(segment),
            _ => None,
        }
    }

    /// This shape as a space, if it is one.
    pub fn as_space(&self) -> Option<&Space> {
        match &self.kind {
            ShapeKind::Space(space) => Some(space),
            _ => None,
        }
    }

    /// This shape as a mutable space, if it is one.
    pub fn as_space_mut(&mut self) -> Option<&mut Space> {
        match &mut self.kind {
            ShapeKind::Space(space) => Some(space),
            _ => None,
        }
    }

    /// The reference position of this shape: a circle's center, a
    /// rectangle's minimum corner, a segment's first endpoint, a space's
    /// root-member position (the origin when the space is empty).
    pub fn position(&self) -> Point {
        match &self.kind {
            ShapeKind::Circle(circle) => circle.center,
            ShapeKind::Rect(rect) => rect.pos,
            ShapeKind::Segment(segment) => segment.a,
            ShapeKind::Space(space) => space.position(),
        }
    }

    /// Moves this shape so its reference position lands on `position`; every
    /// other part of the shape keeps its offset relative to that reference.
    pub fn set_position(&mut self, position: Point) {
        let delta = position - self.position();
        self.translate(&delta);
    }

    /// Moves this shape by `delta`. A space broadcasts the move to every
    /// member.
    pub fn translate(&mut self, delta: &Vector) {
        match &mut self.kind {
            ShapeKind::Circle(circle) => circle.center += delta,
            ShapeKind::Rect(rect) => rect.pos += delta,
            ShapeKind::Segment(segment) => {
                segment.a += delta;
                segment.b += delta;
            }
            ShapeKind::Space(space) => space.translate(delta),
        }
    }

    /// The bounding rectangle of this shape, usable as a cheap pre-filter in
    /// front of the exact predicates.
    pub fn bounding_rect(&self) -> Aabb {
        match &self.kind {
            ShapeKind::Circle(circle) => circle.aabb(),
            ShapeKind::Rect(rect) => rect.aabb(),
            ShapeKind::Segment(segment) => segment.aabb(),
            ShapeKind::Space(space) => space.bounding_rect(),
        }
    }

    /// Tests whether this shape collides with `other`, touching included.
    ///
    /// A pairing with no geometric rule is reported as a warning on the
    /// `log` channel and treated as not colliding, so a simulation driving
    /// this once per tick keeps running.
    pub fn is_colliding(&self, other: &Shape) -> bool {
        match query::overlap(self, other) {
            Ok(overlap) => overlap.is_colliding(),
            Err(query::Unsupported) => {
                query::warn_unsupported(self, other);
                false
            }
        }
    }

    /// Tests whether this shape would collide with `other` after moving by
    /// `delta`, without moving it.
    ///
    /// The test runs against a translated copy of the position, so it is
    /// observably pure: neither shape's reported position changes, on any
    /// path.
    pub fn would_be_colliding(&self, other: &Shape, delta: &Vector) -> bool {
        match query::overlap_at(self, delta, other) {
            Ok(overlap) => overlap.is_colliding(),
            Err(query::Unsupported) => {
                query::warn_unsupported(self, other);
                false
            }
        }
    }

    /// Adds the given tags, skipping ones already present. A space
    /// broadcasts to every member.
    pub fn add_tags(&mut self, tags: &[&str]) {
        match &mut self.kind {
            ShapeKind::Space(space) => space.add_tags(tags),
            _ => {
                for tag in tags {
                    if !self.tags.iter().any(|existing| existing.as_str() == *tag) {
                        self.tags.push((*tag).to_owned());
                    }
                }
            }
        }
    }

    /// Removes the given tags. A space broadcasts to every member.
    pub fn remove_tags(&mut self, tags: &[&str]) {
        match &mut self.kind {
            ShapeKind::Space(space) => space.remove_tags(tags),
            _ => self
                .tags
                .retain(|existing| !tags.iter().any(|tag| existing.as_str() == *tag)),
        }
    }

    /// Removes every tag. A space broadcasts to every member.
    pub fn clear_tags(&mut self) {
        match &mut self.kind {
            ShapeKind::Space(space) => space.clear_tags(),
            _ => self.tags.clear(),
        }
    }

    /// Whether this shape carries all of `tags`. For a space: whether every
    /// member does.
    pub fn has_tags(&self, tags: &[&str]) -> bool {
        match &self.kind {
            ShapeKind::Space(space) => space.has_tags(tags),
            _ => tags
                .iter()
                .all(|tag| self.tags.iter().any(|existing| existing.as_str() == *tag)),
        }
    }

    /// The tags of this shape. For a space: the root member's tags.
    pub fn tags(&self) -> Vec<String> {
        match &self.kind {
            ShapeKind::Space(space) => space.tags(),
            _ => self.tags.clone(),
        }
    }

    /// The opaque user payload. For a space: the root member's payload.
    pub fn data(&self) -> Option<Rc<dyn Any>> {
        match &self.kind {
            ShapeKind::Space(space) => space.data(),
            _ => self.data.clone(),
        }
    }

    /// Attaches an opaque user payload. A space broadcasts to every member.
    pub fn set_data(&mut self, data: Rc<dyn Any>) {
        match &mut self.kind {
            ShapeKind::Space(space) => space.set_data(data),
            _ => self.data = Some(data),
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("kind", &self.kind)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
