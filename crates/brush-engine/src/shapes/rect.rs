/// Axis-aligned rectangle covering `[x, x + w) × [y, y + h)`.
///
/// Width and height are unsigned; a zero width or height covers no pixel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rectangle {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        let (x0, y0) = (self.x as i64, self.y as i64);
        x >= x0 && y >= y0 && x < x0 + self.w as i64 && y < y0 + self.h as i64
    }
}

impl From<(i32, i32, u32, u32)> for Rectangle {
    #[inline]
    fn from((x, y, w, h): (i32, i32, u32, u32)) -> Self {
        Self::new(x, y, w, h)
    }
}
