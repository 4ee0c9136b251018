//! Application contract and the loop that drives it.
//!
//! The loop receives its event source and painter explicitly; there is no
//! global engine state.

mod app;
mod app_loop;

pub use app::{App, AppControl};
pub use app_loop::{AppLoop, LoopState};
