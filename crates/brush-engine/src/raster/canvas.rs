use crate::paint::Color;
use crate::shapes::{Circle, Line, Point, Rectangle};

/// CPU pixel buffer in row-major `Rgba8` layout.
///
/// This is the painter's back buffer. Every primitive is clipped against the
/// buffer bounds, so any `i32` coordinate is accepted. Pixels are replaced,
/// not blended.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    /// Creates a canvas filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x as i64, y as i64)
            .map(|i| Color::from_bytes(self.pixels[i]))
    }

    /// Pixels as `[r, g, b, a]` texels, row-major.
    #[inline]
    pub fn texels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Pixels as a flat byte slice, ready for a texture upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        let texel = color.to_bytes();
        self.pixels.iter().filter(|p| **p == texel).count()
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Fills the whole canvas.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_bytes());
    }

    pub fn point(&mut self, p: Point, color: Color) {
        self.put(p.x as i64, p.y as i64, color.to_bytes());
    }

    /// Rasterizes a 1-pixel-wide segment, both endpoints included.
    ///
    /// One pixel per step along the major axis; the minor-axis offset of step
    /// `i` is `round(i * minor / major)`. Only steps whose major-axis
    /// coordinate falls inside the canvas are visited.
    pub fn line(&mut self, line: Line, color: Color) {
        let texel = color.to_bytes();
        let (x1, y1) = (line.x1 as i64, line.y1 as i64);
        let (x2, y2) = (line.x2 as i64, line.y2 as i64);

        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x2 < x1 { -1 } else { 1 };
        let sy = if y2 < y1 { -1 } else { 1 };

        let steps = dx.max(dy);
        if steps == 0 {
            self.put(x1, y1, texel);
            return;
        }

        let x_major = dx >= dy;
        let (origin, sign, extent) = if x_major {
            (x1, sx, self.width as i64)
        } else {
            (y1, sy, self.height as i64)
        };

        let Some((lo, hi)) = visible_steps(origin, sign, extent, steps) else {
            return;
        };

        for i in lo..=hi {
            let (x, y) = if x_major {
                (x1 + i * sx, y1 + sy * div_round(i, dy, dx))
            } else {
                (x1 + sx * div_round(i, dx, dy), y1 + i * sy)
            };
            self.put(x, y, texel);
        }
    }

    /// Fills `[x, x + w) × [y, y + h)`; empty rectangles draw nothing.
    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        if rect.is_empty() {
            return;
        }

        let texel = color.to_bytes();
        let x0 = (rect.x as i64).max(0);
        let y0 = (rect.y as i64).max(0);
        let x1 = (rect.x as i64 + rect.w as i64).min(self.width as i64);
        let y1 = (rect.y as i64 + rect.h as i64).min(self.height as i64);

        for y in y0..y1 {
            self.span(x0, x1 - 1, y, texel);
        }
    }

    /// Fills a disc with horizontal spans.
    ///
    /// Every row at distance `dy < r` from the center gets a span of
    /// half-width `floor(sqrt(r² - dy²))`. Rows `y - r` and `y + r` are never
    /// touched, and a zero radius draws nothing.
    pub fn fill_circle(&mut self, circle: Circle, color: Color) {
        let texel = color.to_bytes();
        let (cx, cy, r) = (circle.x as i64, circle.y as i64, circle.r as i64);

        for y in 0..self.height as i64 {
            let dy = (y - cy).abs();
            if dy >= r {
                continue;
            }
            let half = isqrt(r as i128 * r as i128 - dy as i128 * dy as i128);
            self.span(cx - half, cx + half, y, texel);
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, texel: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = texel;
        }
    }

    /// Horizontal span `[x0, x1]` (inclusive), clipped.
    fn span(&mut self, x0: i64, x1: i64, y: i64, texel: [u8; 4]) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i64 - 1);
        if x0 > x1 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x0 as usize..=row + x1 as usize].fill(texel);
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Range of steps `i` in `[0, steps]` for which `origin + i * sign` lies in
/// `[0, extent)`.
fn visible_steps(origin: i64, sign: i64, extent: i64, steps: i64) -> Option<(i64, i64)> {
    if extent <= 0 {
        return None;
    }
    let (lo, hi) = if sign > 0 {
        (-origin, extent - 1 - origin)
    } else {
        (origin - (extent - 1), origin)
    };
    let lo = lo.max(0);
    let hi = hi.min(steps);
    (lo <= hi).then_some((lo, hi))
}

/// `round(i * num / den)` for non-negative operands, halves rounded up.
#[inline]
fn div_round(i: i64, num: i64, den: i64) -> i64 {
    let n = i as i128 * num as i128;
    let d = den as i128;
    ((2 * n + d) / (2 * d)) as i64
}

/// Integer square root (floor).
fn isqrt(v: i128) -> i64 {
    if v <= 0 {
        return 0;
    }
    let mut s = (v as f64).sqrt() as i128;
    while s * s > v {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= v {
        s += 1;
    }
    s as i64
}
