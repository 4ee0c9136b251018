use crate::event::Event;
use crate::painter::{Painter, Surface};
use crate::time::FrameTime;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`AppLoop`](super::AppLoop).
pub trait App<S: Surface> {
    /// Called for every polled event, before the frame is drawn.
    fn on_event(&mut self, event: &Event) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Draws one frame. The loop presents afterwards.
    fn on_frame(&mut self, painter: &mut Painter<S>, time: FrameTime) -> AppControl;
}
