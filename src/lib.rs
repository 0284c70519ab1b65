/*!
sweep2d
========

**sweep2d** is a 2-dimensional collision detection and swept-movement
resolution library written with the rust programming language.

It answers three questions about shapes placed in a shared coordinate
space: are two shapes overlapping, would they overlap after a proposed
displacement, and what is the largest part of that displacement that can
be applied without overlap. It is meant to be driven once per simulation
tick by an external game loop.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point2, Vector2};

    /// The scalar coordinate type used throughout this crate.
    ///
    /// Coordinates are integers, so every collision predicate classifies
    /// exactly and deterministically. Squared lengths are computed in wider
    /// integers; keep coordinate magnitudes below roughly `2^28` so those
    /// computations cannot overflow.
    pub type Coord = i32;

    /// The point type.
    pub type Point = Point2<Coord>;

    /// The vector type.
    pub type Vector = Vector2<Coord>;
}
