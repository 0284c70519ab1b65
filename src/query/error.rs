use std::fmt;

/// Error indicating that a geometric query is not supported between certain
/// shape combinations.
///
/// The pairwise rules cover circle–circle, circle–rectangle, circle–segment
/// and rectangle–rectangle, with spaces broadcasting over their members. The
/// remaining pairings (rectangle–segment, segment–segment) have no defined
/// rule and report this error instead. The [`Shape`](crate::shape::Shape)
/// surface turns the error into a logged warning and a "not colliding"
/// answer, so a running simulation degrades instead of halting.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these shapes")
    }
}

impl std::error::Error for Unsupported {}
