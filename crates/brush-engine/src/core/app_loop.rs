use anyhow::Result;

use crate::event::{EventKind, EventSource};
use crate::painter::{Painter, PresentOutcome, Surface};
use crate::time::FrameClock;

use super::app::{App, AppControl};

/// Loop state machine. `Stopped` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Poll-draw-present loop over an explicit event source and painter.
///
/// Each [`step`](AppLoop::step) drains every pending event, draws one frame
/// and presents it exactly once. A quit event (or [`AppControl::Exit`])
/// stops the loop after the current frame has been presented.
pub struct AppLoop<E: EventSource, S: Surface> {
    events: E,
    painter: Painter<S>,
    state: LoopState,
    clock: FrameClock,
    frames: u64,
}

impl<E: EventSource, S: Surface> AppLoop<E, S> {
    pub fn new(events: E, painter: Painter<S>) -> Self {
        Self {
            events,
            painter,
            state: LoopState::Running,
            clock: FrameClock::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn painter(&self) -> &Painter<S> {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut Painter<S> {
        &mut self.painter
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one iteration. Does nothing once stopped.
    ///
    /// A present error stops the loop and is returned.
    pub fn step<A: App<S>>(&mut self, app: &mut A) -> Result<LoopState> {
        if self.state == LoopState::Stopped {
            return Ok(self.state);
        }

        let mut stop = false;
        for event in self.events.drain() {
            if event.kind() == EventKind::Quit {
                stop = true;
            }
            if app.on_event(&event) == AppControl::Exit {
                stop = true;
            }
        }

        let time = self.clock.tick();
        if app.on_frame(&mut self.painter, time) == AppControl::Exit {
            stop = true;
        }

        let presented = self.painter.present();
        if presented.is_err() {
            self.state = LoopState::Stopped;
        }
        if presented? == PresentOutcome::Presented {
            self.frames += 1;
        }

        if stop {
            log::info!("loop stopped after {} frames", self.frames);
            self.state = LoopState::Stopped;
        }
        Ok(self.state)
    }

    /// Steps until stopped. Returns the number of frames presented.
    pub fn run<A: App<S>>(&mut self, app: &mut A) -> Result<u64> {
        while self.step(app)? == LoopState::Running {}
        Ok(self.frames)
    }

    pub fn into_parts(self) -> (E, Painter<S>) {
        (self.events, self.painter)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use anyhow::bail;

    use super::*;
    use crate::event::{Event, EventQueue, Key};
    use crate::paint::Color;
    use crate::painter::HeadlessSurface;
    use crate::raster::Canvas;
    use crate::time::FrameTime;

    /// Hands out one scripted batch per frame.
    #[derive(Default)]
    struct Script {
        batches: VecDeque<Vec<Event>>,
        current: VecDeque<Event>,
        loaded: bool,
        polls: usize,
    }

    impl Script {
        fn new(batches: Vec<Vec<Event>>) -> Self {
            Self {
                batches: batches.into(),
                ..Self::default()
            }
        }
    }

    impl EventSource for Script {
        fn poll(&mut self) -> Option<Event> {
            self.polls += 1;
            if !self.loaded {
                self.current = self.batches.pop_front().unwrap_or_default().into();
                self.loaded = true;
            }
            let ev = self.current.pop_front();
            if ev.is_none() {
                self.loaded = false;
            }
            ev
        }
    }

    /// Clears to a color that changes with every frame and counts events.
    #[derive(Default)]
    struct Recorder {
        frames: Vec<u64>,
        events: Vec<Event>,
        exit_on_frame: Option<u64>,
    }

    impl App<HeadlessSurface> for Recorder {
        fn on_event(&mut self, event: &Event) -> AppControl {
            self.events.push(*event);
            AppControl::Continue
        }

        fn on_frame(
            &mut self,
            painter: &mut Painter<HeadlessSurface>,
            time: FrameTime,
        ) -> AppControl {
            self.frames.push(time.frame_index);
            painter.set_color(0x10000000 * (time.frame_index as u32 + 1) | 0xff);
            painter.clear();
            match self.exit_on_frame {
                Some(n) if n == time.frame_index => AppControl::Exit,
                _ => AppControl::Continue,
            }
        }
    }

    fn headless() -> Painter<HeadlessSurface> {
        Painter::new(HeadlessSurface::new(16, 16))
    }

    // ── state machine ─────────────────────────────────────────────────────

    #[test]
    fn starts_running() {
        let lp = AppLoop::new(EventQueue::new(), headless());
        assert_eq!(lp.state(), LoopState::Running);
        assert_eq!(lp.frames(), 0);
    }

    #[test]
    fn quit_frame_is_drawn_and_presented_then_stops() {
        let script = Script::new(vec![
            vec![],
            vec![Event::KeyDown { key: Key::A, repeat: false }, Event::Quit],
            vec![],
        ]);
        let mut lp = AppLoop::new(script, headless());
        let mut app = Recorder::default();

        assert_eq!(lp.step(&mut app).unwrap(), LoopState::Running);
        assert_eq!(lp.step(&mut app).unwrap(), LoopState::Stopped);

        assert_eq!(app.frames, vec![0, 1]);
        assert_eq!(lp.frames(), 2);
        assert_eq!(lp.painter().surface().presents(), 2);
        let front = lp.painter().surface().front().unwrap();
        assert_eq!(front.pixel(0, 0), Some(Color::hex(0x200000ff)));
    }

    #[test]
    fn no_frames_after_stopped() {
        let mut lp = AppLoop::new(Script::new(vec![vec![Event::Quit]]), headless());
        let mut app = Recorder::default();

        assert_eq!(lp.run(&mut app).unwrap(), 1);
        assert_eq!(lp.step(&mut app).unwrap(), LoopState::Stopped);
        assert_eq!(lp.step(&mut app).unwrap(), LoopState::Stopped);

        assert_eq!(app.frames.len(), 1);
        assert_eq!(lp.painter().surface().presents(), 1);
    }

    #[test]
    fn drains_every_event_before_drawing() {
        let batch = vec![
            Event::KeyDown { key: Key::Q, repeat: false },
            Event::KeyUp { key: Key::Q },
            Event::Quit,
            Event::KeyDown { key: Key::W, repeat: false },
        ];
        let mut lp = AppLoop::new(Script::new(vec![batch.clone()]), headless());
        let mut app = Recorder::default();

        lp.run(&mut app).unwrap();
        assert_eq!(app.events, batch);
        // Four events plus the terminating `None`.
        assert_eq!(lp.into_parts().0.polls, 5);
    }

    #[test]
    fn app_exit_stops_like_quit() {
        let mut lp = AppLoop::new(EventQueue::new(), headless());
        let mut app = Recorder {
            exit_on_frame: Some(2),
            ..Recorder::default()
        };

        assert_eq!(lp.run(&mut app).unwrap(), 3);
        assert_eq!(app.frames, vec![0, 1, 2]);
    }

    #[test]
    fn scripted_queue_can_be_fed_between_frames() {
        let mut lp = AppLoop::new(EventQueue::new(), headless());
        let mut app = Recorder::default();

        lp.step(&mut app).unwrap();
        lp.events_mut().push(Event::Quit);
        assert_eq!(lp.step(&mut app).unwrap(), LoopState::Stopped);
        assert_eq!(app.events, vec![Event::Quit]);
    }

    // ── present failures ──────────────────────────────────────────────────

    struct Flaky {
        skips: u32,
    }

    impl Surface for Flaky {
        fn size(&self) -> (u32, u32) {
            (4, 4)
        }

        fn present(&mut self, _: &Canvas) -> Result<PresentOutcome> {
            match self.skips {
                0 => bail!("out of memory"),
                _ => {
                    self.skips -= 1;
                    Ok(PresentOutcome::Skipped)
                }
            }
        }
    }

    struct Blank;

    impl App<Flaky> for Blank {
        fn on_frame(&mut self, painter: &mut Painter<Flaky>, _: FrameTime) -> AppControl {
            painter.clear();
            AppControl::Continue
        }
    }

    #[test]
    fn skipped_frames_are_not_counted() {
        let mut lp = AppLoop::new(EventQueue::new(), Painter::new(Flaky { skips: 2 }));
        assert_eq!(lp.step(&mut Blank).unwrap(), LoopState::Running);
        assert_eq!(lp.step(&mut Blank).unwrap(), LoopState::Running);
        assert_eq!(lp.frames(), 0);
    }

    #[test]
    fn present_error_stops_and_propagates() {
        let mut lp = AppLoop::new(EventQueue::new(), Painter::new(Flaky { skips: 1 }));
        let err = lp.run(&mut Blank).unwrap_err();
        assert!(err.to_string().contains("out of memory"));
        assert_eq!(lp.state(), LoopState::Stopped);
    }
}
