pub use self::overlap::{
    intersection_test, intersection_test_at, overlap, overlap_at, Overlap,
};
pub use self::overlap_circle_circle::overlap_circle_circle;
pub use self::overlap_circle_rect::overlap_circle_rect;
pub use self::overlap_circle_segment::overlap_circle_segment;
pub use self::overlap_rect_rect::overlap_rect_rect;

pub(crate) use self::overlap::warn_unsupported;

mod overlap;
mod overlap_circle_circle;
mod overlap_circle_rect;
mod overlap_circle_segment;
mod overlap_rect_rect;
