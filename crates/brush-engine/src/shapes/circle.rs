use super::Point;

/// Circle given by its center and radius.
///
/// A zero radius covers no pixel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: u32,
}

impl Circle {
    #[inline]
    pub const fn new(x: i32, y: i32, r: u32) -> Self {
        Self { x, y, r }
    }

    #[inline]
    pub const fn center(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<(i32, i32, u32)> for Circle {
    #[inline]
    fn from((x, y, r): (i32, i32, u32)) -> Self {
        Self::new(x, y, r)
    }
}

impl From<(Point, u32)> for Circle {
    #[inline]
    fn from((center, r): (Point, u32)) -> Self {
        Self::new(center.x, center.y, r)
    }
}
