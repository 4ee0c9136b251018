//! Native window + host event loop.
//!
//! [`Platform`] owns the winit `EventLoop` and acts as the event source;
//! [`Window`] owns the winit window and its GPU surface.

mod config;
mod platform;
mod window;

pub use config::{Cursor, WindowConfig};
pub use platform::Platform;
pub use window::Window;
