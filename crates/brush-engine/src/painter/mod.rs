//! Immediate-mode painter and the surfaces it presents to.

mod painter;
mod surface;

pub use painter::Painter;
pub use surface::{HeadlessSurface, PresentOutcome, Surface};
