//! Event subsystem.
//!
//! Public event types do not expose winit types. The platform layer
//! translates window system events through [`translate_window_event`].

mod queue;
mod types;
mod translate;

pub use queue::{Drain, EventQueue, EventSource};
pub use types::{Event, EventKind, Key, MouseButton, MouseButtons};
pub use translate::{map_key, map_mouse_button, translate_window_event, CanvasMapping, PointerState};
