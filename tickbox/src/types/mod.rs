mod color;
mod geometry;

pub use color::{Color, Rgb};
pub use geometry::Rect;
pub use kurbo::Point;
