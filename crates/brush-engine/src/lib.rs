//! Brush engine crate.
//!
//! A window, an event source and an immediate-mode 2D painter. Drawing is
//! rasterized on the CPU into a [`raster::Canvas`] and presented through
//! wgpu.
//!
//! ```no_run
//! use brush_engine::core::{App, AppControl, AppLoop};
//! use brush_engine::painter::{Painter, Surface};
//! use brush_engine::time::FrameTime;
//! use brush_engine::window::{Platform, WindowConfig};
//!
//! struct Scene;
//!
//! impl<S: Surface> App<S> for Scene {
//!     fn on_frame(&mut self, painter: &mut Painter<S>, _time: FrameTime) -> AppControl {
//!         painter.set_color(0x3c5e8bff);
//!         painter.clear();
//!         painter.set_color(0x7a367bff);
//!         painter.draw_circle((20, 65, 10));
//!         AppControl::Continue
//!     }
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut platform = Platform::new()?;
//! let window = platform.open_window(WindowConfig::new("Example", 1280, 720))?;
//! AppLoop::new(platform, Painter::new(window)).run(&mut Scene)?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod device;
pub mod event;
pub mod logging;
pub mod paint;
pub mod painter;
pub mod raster;
pub mod render;
pub mod shapes;
pub mod time;
pub mod window;

pub use paint::Color;
pub use painter::{HeadlessSurface, Painter, Surface};
pub use shapes::{Circle, Line, Point, Rectangle};
