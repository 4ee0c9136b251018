use anyhow::Result;

use crate::raster::Canvas;

/// Result of handing a finished frame to a surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentOutcome {
    /// The frame is now visible (or stored, for off-screen surfaces).
    Presented,
    /// The surface could not take this frame (resize, timeout, minimized);
    /// drawing may resume on the next frame.
    Skipped,
}

/// Destination a [`Painter`](super::Painter) presents its back buffer to.
///
/// Implemented by [`Window`](crate::window::Window) for on-screen output and by
/// [`HeadlessSurface`] for off-screen rendering.
pub trait Surface {
    /// Back-buffer size in pixels. Queried once when the painter is created.
    fn size(&self) -> (u32, u32);

    /// Publishes `canvas`. Errors are fatal for the surface.
    fn present(&mut self, canvas: &Canvas) -> Result<PresentOutcome>;
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn present(&mut self, canvas: &Canvas) -> Result<PresentOutcome> {
        (**self).present(canvas)
    }
}

/// Off-screen surface that keeps a copy of the last presented frame.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    front: Option<Canvas>,
    presents: u64,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            front: None,
            presents: 0,
        }
    }

    /// Last presented frame, `None` before the first present.
    pub fn front(&self) -> Option<&Canvas> {
        self.front.as_ref()
    }

    /// Number of frames presented so far.
    pub fn presents(&self) -> u64 {
        self.presents
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn present(&mut self, canvas: &Canvas) -> Result<PresentOutcome> {
        match &mut self.front {
            Some(front) if front.size() == canvas.size() => front.clone_from(canvas),
            front => *front = Some(canvas.clone()),
        }
        self.presents += 1;
        Ok(PresentOutcome::Presented)
    }
}
