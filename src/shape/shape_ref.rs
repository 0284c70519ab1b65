use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::shape::Shape;

/// A shared handle to a [`Shape`].
///
/// Cloning the handle clones the reference, not the shape. Equality between
/// handles is reference identity: two handles are equal iff they point at the
/// same shape, so shapes with identical geometry remain distinct entities for
/// membership and removal. Like the rest of the crate, the handle is
/// single-threaded; callers serialize all position mutation.
pub struct ShapeRef(
    /// The shared cell holding the shape.
    pub Rc<RefCell<Shape>>,
);

impl ShapeRef {
    /// Wraps a shape into a new shared handle.
    pub fn new(shape: Shape) -> ShapeRef {
        ShapeRef(Rc::new(RefCell::new(shape)))
    }
}

impl From<Shape> for ShapeRef {
    fn from(shape: Shape) -> ShapeRef {
        ShapeRef::new(shape)
    }
}

impl Clone for ShapeRef {
    fn clone(&self) -> ShapeRef {
        ShapeRef(Rc::clone(&self.0))
    }
}

impl Deref for ShapeRef {
    type Target = RefCell<Shape>;

    fn deref(&self) -> &RefCell<Shape> {
        &self.0
    }
}

impl PartialEq for ShapeRef {
    fn eq(&self, other: &ShapeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ShapeRef {}

impl fmt::Debug for ShapeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(shape) => f.debug_tuple("ShapeRef").field(&*shape).finish(),
            Err(_) => f.pad("ShapeRef(<borrowed>)"),
        }
    }
}
