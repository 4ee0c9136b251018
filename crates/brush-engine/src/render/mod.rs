//! GPU rendering subsystem.
//!
//! Drawing happens on the CPU into a [`Canvas`](crate::raster::Canvas);
//! renderers here only move finished frames onto the surface.

mod blit;
mod ctx;

pub use blit::BlitRenderer;
pub use ctx::{RenderCtx, RenderTarget};
