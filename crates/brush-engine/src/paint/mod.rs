//! Paint model shared by the painter and the rasterizer.
//!
//! Scope is a single solid color per draw call; the painter keeps the
//! "current color" and hands it to the rasterizer.

pub mod color;

pub use color::Color;
