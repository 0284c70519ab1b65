//! A collection of shapes sharing one coordinate space.

use std::any::Any;
use std::rc::Rc;
use std::slice;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Vector};
use crate::query::{self, Collision};
use crate::shape::{ShapeKind, ShapeRef};

/// Error returned by [`Space::add`] when an insertion would make a space
/// contain itself, directly or through nested spaces.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("a space cannot contain itself, directly or through nested spaces")]
pub struct RecursiveSpaceError;

/// An ordered collection of shapes living in one shared coordinate space.
///
/// A `Space` is the scene container — it answers "does this shape collide
/// with anything here", hands back colliding subsets, and resolves movement
/// against every member — and at the same time a compound shape: wrapped in
/// [`Shape::space`](crate::shape::Shape::space) it satisfies the whole shape
/// surface, delegating singular queries (position, payload) to its first
/// member — the root — and broadcasting collective operations (movement,
/// tagging) to every member. Removing the root shifts delegation to the new
/// first member.
///
/// Membership is by reference identity: two shapes with identical geometry
/// are distinct members.
#[derive(Debug, Default)]
pub struct Space {
    shapes: Vec<ShapeRef>,
}

impl Space {
    /// Creates a new, empty space.
    pub fn new() -> Space {
        Space { shapes: Vec::new() }
    }

    /// Adds a shape to the space.
    ///
    /// Fails when the insertion would make this space contain itself,
    /// directly or through nested spaces; the failed insertion leaves the
    /// space unchanged.
    pub fn add(&mut self, shape: ShapeRef) -> Result<(), RecursiveSpaceError> {
        if reaches_locked_cell(&shape) {
            return Err(RecursiveSpaceError);
        }
        self.shapes.push(shape);
        Ok(())
    }

    /// Removes the first occurrence of `shape`, by identity. Returns whether
    /// it was present.
    pub fn remove(&mut self, shape: &ShapeRef) -> bool {
        match self.shapes.iter().position(|other| other == shape) {
            Some(index) => {
                let _ = self.shapes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every shape from the space.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Whether `shape` is a member of this space, by identity.
    pub fn contains(&self, shape: &ShapeRef) -> bool {
        self.shapes.iter().any(|other| other == shape)
    }

    /// The number of shapes in this space.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether this space has no members.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The member at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ShapeRef> {
        self.shapes.get(index)
    }

    /// Iterates over the members, in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, ShapeRef> {
        self.shapes.iter()
    }

    /// All members, in insertion order.
    pub fn shapes(&self) -> &[ShapeRef] {
        &self.shapes
    }

    /// Whether `shape` collides with any other member of this space.
    pub fn is_colliding(&self, shape: &ShapeRef) -> bool {
        let checking = shape.borrow();
        self.shapes
            .iter()
            .filter(|other| *other != shape)
            .any(|other| checking.is_colliding(&other.borrow()))
    }

    /// A new space made of the members colliding with `shape`, `shape`
    /// itself excluded.
    pub fn colliding_shapes(&self, shape: &ShapeRef) -> Space {
        let checking = shape.borrow();
        Space {
            shapes: self
                .shapes
                .iter()
                .filter(|other| *other != shape && checking.is_colliding(&other.borrow()))
                .cloned()
                .collect(),
        }
    }

    /// Resolves the displacement of `shape` against every other member and
    /// returns the first blocking result, in insertion order, with the
    /// blocking member recorded in [`Collision::obstacle`]. Members whose
    /// bounding rectangle stays clear of the displacement's swept bounding
    /// rectangle are skipped without running the resolver.
    pub fn resolve(&self, shape: &ShapeRef, delta: Vector) -> Collision {
        let moving = shape.borrow();
        let bounds = moving.bounding_rect();
        if !bounds.is_valid() {
            // An empty compound occupies nothing and cannot be blocked.
            return Collision::cleared(delta);
        }
        let swept = bounds.merged(&bounds.translated(&delta));

        for other in &self.shapes {
            if other == shape {
                continue;
            }
            let obstacle = other.borrow();
            if !swept.intersects(&obstacle.bounding_rect()) {
                continue;
            }
            let collision = query::resolve(&moving, &obstacle, delta);
            if collision.colliding {
                return Collision {
                    obstacle: Some(other.clone()),
                    ..collision
                };
            }
        }

        Collision::cleared(delta)
    }

    /// A new space made of the members satisfying `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> Space
    where
        F: FnMut(&ShapeRef) -> bool,
    {
        Space {
            shapes: self
                .shapes
                .iter()
                .filter(|shape| predicate(shape))
                .cloned()
                .collect(),
        }
    }

    /// A new space made of the members carrying all of `tags`.
    pub fn filter_by_tags(&self, tags: &[&str]) -> Space {
        self.filter(|shape| shape.borrow().has_tags(tags))
    }

    /// A new space made of the members not carrying all of `tags`.
    pub fn filter_out_by_tags(&self, tags: &[&str]) -> Space {
        self.filter(|shape| !shape.borrow().has_tags(tags))
    }

    /// The position of the root member, or the origin for an empty space.
    pub fn position(&self) -> Point {
        self.shapes
            .first()
            .map(|shape| shape.borrow().position())
            .unwrap_or_else(Point::origin)
    }

    /// Moves every member so that the root lands on `position`, preserving
    /// the members' relative spacing.
    pub fn set_position(&self, position: Point) {
        if self.shapes.is_empty() {
            return;
        }
        let delta = position - self.position();
        self.translate(&delta);
    }

    /// Moves every member by `delta`.
    pub fn translate(&self, delta: &Vector) {
        for shape in &self.shapes {
            shape.borrow_mut().translate(delta);
        }
    }

    /// The merged bounding rectangle of all members. An empty space yields
    /// an inverted rectangle that intersects nothing.
    pub fn bounding_rect(&self) -> Aabb {
        let mut aabb = Aabb::new_invalid();
        for shape in &self.shapes {
            aabb = aabb.merged(&shape.borrow().bounding_rect());
        }
        aabb
    }

    /// Adds tags to every member.
    pub fn add_tags(&self, tags: &[&str]) {
        for shape in &self.shapes {
            shape.borrow_mut().add_tags(tags);
        }
    }

    /// Removes tags from every member.
    pub fn remove_tags(&self, tags: &[&str]) {
        for shape in &self.shapes {
            shape.borrow_mut().remove_tags(tags);
        }
    }

    /// Clears the tags of every member.
    pub fn clear_tags(&self) {
        for shape in &self.shapes {
            shape.borrow_mut().clear_tags();
        }
    }

    /// Whether every member carries all of `tags`.
    pub fn has_tags(&self, tags: &[&str]) -> bool {
        self.shapes.iter().all(|shape| shape.borrow().has_tags(tags))
    }

    /// The tags of the root member; empty for an empty space.
    pub fn tags(&self) -> Vec<String> {
        self.shapes
            .first()
            .map(|shape| shape.borrow().tags())
            .unwrap_or_default()
    }

    /// The payload of the root member, if any.
    pub fn data(&self) -> Option<Rc<dyn Any>> {
        self.shapes.first().and_then(|shape| shape.borrow().data())
    }

    /// Attaches `data` to every member.
    pub fn set_data(&self, data: Rc<dyn Any>) {
        for shape in &self.shapes {
            shape.borrow_mut().set_data(Rc::clone(&data));
        }
    }
}

// The only cell mutably borrowed while `Space::add` runs is the one holding
// the destination space itself (callers serialize mutation), so reaching an
// unreadable cell from the inserted subtree means the insertion would close
// a membership cycle.
fn reaches_locked_cell(shape: &ShapeRef) -> bool {
    match shape.try_borrow() {
        Err(_) => true,
        Ok(inner) => match inner.kind() {
            ShapeKind::Space(space) => space.shapes.iter().any(reaches_locked_cell),
            _ => false,
        },
    }
}
