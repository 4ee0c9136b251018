//! Software rasterizer.
//!
//! The painter draws into a [`Canvas`] on the CPU; presenting uploads the
//! finished canvas to the window surface in one copy.

mod canvas;

pub use canvas::Canvas;
