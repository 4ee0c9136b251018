use anyhow::Result;

use crate::paint::Color;
use crate::raster::Canvas;
use crate::shapes::{Circle, Line, Point, Rectangle};

use super::surface::{PresentOutcome, Surface};

/// Immediate-mode 2D painter bound to a [`Surface`].
///
/// Drawing calls write into an off-screen [`Canvas`] (the back buffer) using
/// the current color. Nothing reaches the surface until [`Painter::present`].
///
/// Every primitive takes `impl Into<Record>`, so positional tuples and
/// record values are interchangeable:
///
/// ```ignore
/// painter.draw_rectangle((10, 20, 20, 20));
/// painter.draw_rectangle(Rectangle::new(10, 20, 20, 20));
/// ```
pub struct Painter<S: Surface> {
    surface: S,
    canvas: Canvas,
    color: Color,
}

impl<S: Surface> Painter<S> {
    /// Binds a painter to `surface`; the back buffer matches its size and
    /// starts transparent. The current color starts opaque black.
    pub fn new(surface: S) -> Self {
        let (width, height) = surface.size();
        log::debug!("Painter::new: back buffer {width}x{height}");
        Self {
            surface,
            canvas: Canvas::new(width, height),
            color: Color::BLACK,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.color = color.into();
    }

    /// Fills the whole back buffer with the current color.
    pub fn clear(&mut self) {
        self.canvas.fill(self.color);
    }

    pub fn draw_point(&mut self, point: impl Into<Point>) {
        self.canvas.point(point.into(), self.color);
    }

    /// One pixel wide, both endpoints included.
    pub fn draw_line(&mut self, line: impl Into<Line>) {
        self.canvas.line(line.into(), self.color);
    }

    /// Filled; covers `[x, x + w) × [y, y + h)`.
    pub fn draw_rectangle(&mut self, rect: impl Into<Rectangle>) {
        self.canvas.fill_rect(rect.into(), self.color);
    }

    /// Filled disc of radius `r` around `(x, y)`.
    pub fn draw_circle(&mut self, circle: impl Into<Circle>) {
        self.canvas.fill_circle(circle.into(), self.color);
    }

    /// Hands the back buffer to the surface. The back buffer keeps its
    /// contents afterwards.
    pub fn present(&mut self) -> Result<PresentOutcome> {
        let outcome = self.surface.present(&self.canvas)?;
        if outcome == PresentOutcome::Skipped {
            log::debug!("Painter::present: frame skipped by surface");
        }
        Ok(outcome)
    }

    /// The back buffer.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: Surface + std::fmt::Debug> std::fmt::Debug for Painter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Painter")
            .field("surface", &self.surface)
            .field("canvas", &self.canvas)
            .field("color", &self.color)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;
    use crate::painter::HeadlessSurface;

    const BG: u32 = 0x3c5e8bff;
    const FG: u32 = 0x7a367bff;

    fn painter(w: u32, h: u32) -> Painter<HeadlessSurface> {
        Painter::new(HeadlessSurface::new(w, h))
    }

    // ── color state ───────────────────────────────────────────────────────

    #[test]
    fn default_color_is_opaque_black() {
        assert_eq!(painter(4, 4).color(), Color::BLACK);
    }

    #[test]
    fn set_color_accepts_packed_u32() {
        let mut p = painter(4, 4);
        p.set_color(FG);
        assert_eq!(p.color(), Color::hex(FG));
    }

    #[test]
    fn back_buffer_matches_surface_size() {
        assert_eq!(painter(1280, 720).canvas().size(), (1280, 720));
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_fills_every_pixel() {
        let mut p = painter(32, 16);
        p.set_color(BG);
        p.clear();
        assert_eq!(p.canvas().count(Color::hex(BG)), 32 * 16);
    }

    #[test]
    fn line_over_clear_only_touches_its_path() {
        let mut p = painter(64, 32);
        p.set_color(BG);
        p.clear();
        p.set_color(FG);
        p.draw_line((10, 10, 50, 10));

        for x in 10..=50 {
            assert_eq!(p.canvas().pixel(x, 10), Some(Color::hex(FG)));
        }
        assert_eq!(p.canvas().count(Color::hex(FG)), 41);
        assert_eq!(p.canvas().count(Color::hex(BG)), 64 * 32 - 41);
    }

    // ── calling conventions ───────────────────────────────────────────────

    #[test]
    fn positional_and_record_forms_draw_the_same_pixels() {
        let mut positional = painter(100, 100);
        positional.set_color(FG);
        positional.draw_point((3, 4));
        positional.draw_line((10, 10, 50, 10));
        positional.draw_rectangle((10, 20, 20, 20));
        positional.draw_circle((20, 65, 10));

        let mut record = painter(100, 100);
        record.set_color(FG);
        record.draw_point(Point::new(3, 4));
        record.draw_line(Line::new(10, 10, 50, 10));
        record.draw_rectangle(Rectangle::new(10, 20, 20, 20));
        record.draw_circle(Circle::new(20, 65, 10));

        assert_eq!(positional.canvas().texels(), record.canvas().texels());
    }

    #[test]
    fn degenerate_primitives_do_not_panic() {
        let mut p = painter(8, 8);
        p.set_color(FG);
        p.draw_line((3, 3, 3, 3));
        p.draw_circle((3, 3, 0));
        p.draw_rectangle((0, 0, 0, 5));
        assert_eq!(p.canvas().count(Color::hex(FG)), 1);
    }

    // ── present ───────────────────────────────────────────────────────────

    #[test]
    fn present_publishes_and_keeps_back_buffer() {
        let mut p = painter(8, 8);
        p.set_color(BG);
        p.clear();
        assert_eq!(p.present().unwrap(), PresentOutcome::Presented);

        assert_eq!(p.surface().presents(), 1);
        let front = p.surface().front().unwrap();
        assert_eq!(front.count(Color::hex(BG)), 64);
        assert_eq!(p.canvas().count(Color::hex(BG)), 64);
    }

    #[test]
    fn surface_errors_propagate() {
        struct Broken;
        impl Surface for Broken {
            fn size(&self) -> (u32, u32) {
                (2, 2)
            }
            fn present(&mut self, _: &Canvas) -> Result<PresentOutcome> {
                bail!("device lost")
            }
        }

        let mut p = Painter::new(Broken);
        let err = p.present().unwrap_err();
        assert!(err.to_string().contains("device lost"));
    }
}
