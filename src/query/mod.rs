//! Geometric queries between shapes.
//!
//! The most general functions provided by this module are:
//!
//! * [`overlap()`] / [`intersection_test()`] to classify or test two shapes
//!   at their current positions.
//! * [`overlap_at()`] / [`intersection_test_at()`] to evaluate the same
//!   question under a hypothetical displacement, without applying it (the
//!   swept test).
//! * [`resolve()`] to turn a desired, possibly-colliding displacement into
//!   the largest safe sub-displacement plus the blocked remainder.
//!
//! The functions exported by the `details` submodule are the specific
//! per-pair rules, usable when both concrete shapes are known at compile
//! time. They have the form `overlap_[shape1]_[shape2]()`.

pub use self::error::Unsupported;
pub use self::overlap::{
    intersection_test, intersection_test_at, overlap, overlap_at, Overlap,
};
pub use self::resolve::{resolve, Collision};

pub(crate) use self::overlap::warn_unsupported;

/// Free functions for specific shape pairings.
pub mod details {
    pub use super::overlap::{
        overlap_circle_circle, overlap_circle_rect, overlap_circle_segment, overlap_rect_rect,
    };
}

mod error;
mod overlap;
mod resolve;
