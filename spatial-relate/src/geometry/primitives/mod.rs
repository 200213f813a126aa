mod point;
mod polygon;
mod rect;
mod segment;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use polygon::Polygon;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use segment::Segment;

pub(crate) use point::{cross, dot};
