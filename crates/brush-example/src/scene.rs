use brush_engine::core::{App, AppControl};
use brush_engine::event::{Event, Key};
use brush_engine::painter::{Painter, Surface};
use brush_engine::shapes::{Circle, Line, Rectangle};
use brush_engine::time::FrameTime;

pub const BACKGROUND: u32 = 0x3c5e8bff;
pub const FOREGROUND: u32 = 0x7a367bff;

/// Horizontal shift of the shapes drawn with record values.
pub const RECORD_OFFSET: i32 = 60;

/// Draws a line, a rectangle and a circle twice: once with positional
/// arguments and once, shifted right, with record values. The color is set
/// again before the record forms.
#[derive(Debug, Default)]
pub struct ExampleScene;

impl<S: Surface> App<S> for ExampleScene {
    fn on_event(&mut self, event: &Event) -> AppControl {
        match event {
            Event::KeyDown { key: Key::Escape, .. } => AppControl::Exit,
            Event::ClickDown { button, x, y } => {
                log::debug!("click {button:?} at ({x}, {y})");
                AppControl::Continue
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, painter: &mut Painter<S>, time: FrameTime) -> AppControl {
        painter.set_color(BACKGROUND);
        painter.clear();

        painter.set_color(FOREGROUND);
        painter.draw_line((10, 10, 50, 10));
        painter.draw_rectangle((10, 20, 20, 20));
        painter.draw_circle((20, 65, 10));

        painter.set_color(FOREGROUND);
        let dx = RECORD_OFFSET;
        painter.draw_line(Line::new(10 + dx, 10, 50 + dx, 10));
        painter.draw_rectangle(Rectangle::new(10 + dx, 20, 20, 20));
        painter.draw_circle(Circle::new(20 + dx, 65, 10));

        if time.frame_index > 0 && time.frame_index % 600 == 0 {
            log::debug!("frame {} (dt {:.4}s)", time.frame_index, time.dt);
        }
        AppControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use brush_engine::core::{AppLoop, LoopState};
    use brush_engine::event::{EventQueue, MouseButton};
    use brush_engine::painter::HeadlessSurface;
    use brush_engine::Color;

    use super::*;

    fn run_one_frame(events: Vec<Event>) -> (AppLoop<EventQueue, HeadlessSurface>, LoopState) {
        let painter = Painter::new(HeadlessSurface::new(1280, 720));
        let mut lp = AppLoop::new(events.into_iter().collect(), painter);
        let state = lp.step(&mut ExampleScene::default()).unwrap();
        (lp, state)
    }

    // ── scenario ──────────────────────────────────────────────────────────

    #[test]
    fn quit_frame_shows_the_scene() {
        let (lp, state) = run_one_frame(vec![Event::Quit]);
        assert_eq!(state, LoopState::Stopped);

        let surface = lp.painter().surface();
        assert_eq!(surface.presents(), 1);
        let front = surface.front().unwrap();
        assert_eq!(front.size(), (1280, 720));

        let bg = Some(Color::hex(BACKGROUND));
        let fg = Some(Color::hex(FOREGROUND));

        // line
        assert_eq!(front.pixel(10, 10), fg);
        assert_eq!(front.pixel(50, 10), fg);
        assert_eq!(front.pixel(51, 10), bg);
        assert_eq!(front.pixel(30, 11), bg);

        // rectangle
        assert_eq!(front.pixel(10, 20), fg);
        assert_eq!(front.pixel(29, 39), fg);
        assert_eq!(front.pixel(30, 20), bg);
        assert_eq!(front.pixel(10, 40), bg);

        // circle
        assert_eq!(front.pixel(20, 65), fg);
        assert_eq!(front.pixel(20, 56), fg);
        assert_eq!(front.pixel(20, 55), bg);
        assert_eq!(front.pixel(20, 75), bg);
        assert_eq!(front.pixel(10, 65), fg);
        assert_eq!(front.pixel(30, 65), fg);
        assert_eq!(front.pixel(9, 65), bg);
        assert_eq!(front.pixel(31, 65), bg);

        assert_eq!(front.pixel(1000, 500), bg);
        assert_eq!(
            front.count(Color::hex(BACKGROUND)) + front.count(Color::hex(FOREGROUND)),
            1280 * 720
        );
    }

    #[test]
    fn record_shapes_match_positional_shapes() {
        let (lp, _) = run_one_frame(vec![]);
        let front = lp.painter().surface().front().unwrap();

        let mut positional = 0;
        for y in 0..100 {
            for x in 0..RECORD_OFFSET {
                let left = front.pixel(x, y);
                assert_eq!(left, front.pixel(x + RECORD_OFFSET, y), "mismatch at ({x}, {y})");
                if left == Some(Color::hex(FOREGROUND)) {
                    positional += 1;
                }
            }
        }
        assert_eq!(front.count(Color::hex(FOREGROUND)), 2 * positional);
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn escape_stops_the_loop() {
        let escape = Event::KeyDown { key: Key::Escape, repeat: false };
        let (_, state) = run_one_frame(vec![escape]);
        assert_eq!(state, LoopState::Stopped);
    }

    #[test]
    fn clicks_keep_running() {
        let click = Event::ClickDown { button: MouseButton::Left, x: 5, y: 5 };
        let (lp, state) = run_one_frame(vec![click]);
        assert_eq!(state, LoopState::Running);
        assert_eq!(lp.frames(), 1);
    }
}
