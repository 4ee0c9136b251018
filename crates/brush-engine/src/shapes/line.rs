use super::Point;

/// Line segment between two inclusive endpoints.
///
/// A degenerate segment (`x1 == x2 && y1 == y2`) is valid and covers one pixel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Line {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Line {
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub const fn between(from: Point, to: Point) -> Self {
        Self::new(from.x, from.y, to.x, to.y)
    }

    #[inline]
    pub const fn start(self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub const fn end(self) -> Point {
        Point::new(self.x2, self.y2)
    }

    #[inline]
    pub const fn is_degenerate(self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }
}

impl From<(i32, i32, i32, i32)> for Line {
    #[inline]
    fn from((x1, y1, x2, y2): (i32, i32, i32, i32)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<(Point, Point)> for Line {
    #[inline]
    fn from((from, to): (Point, Point)) -> Self {
        Self::between(from, to)
    }
}
