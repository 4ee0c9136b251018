//! Geometry records accepted by the painter.
//!
//! Every primitive has one record type. Positional arguments are supported
//! through `From<tuple>` conversions, so `painter.draw_line((10, 10, 50, 10))`
//! and `painter.draw_line(Line { x1: 10, y1: 10, x2: 50, y2: 10 })` go through
//! the exact same code path.
//!
//! Coordinates are integer pixels in back-buffer space (top-left origin,
//! +X right, +Y down).

mod circle;
mod line;
mod point;
mod rect;

pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use rect::Rectangle;
