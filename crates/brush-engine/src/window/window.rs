use anyhow::{bail, Result};
use ouroboros::self_referencing;
use winit::window::{CursorIcon, Window as WinitWindow, WindowId};

use crate::device::{Gpu, GpuInit};
use crate::painter::{PresentOutcome, Surface};
use crate::raster::Canvas;
use crate::render::{BlitRenderer, RenderCtx, RenderTarget};

use super::config::Cursor;

#[self_referencing]
struct WindowInner {
    window: WinitWindow,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Native window with a GPU surface.
///
/// Created by [`Platform::open_window`](super::Platform::open_window). As a
/// [`Surface`] it shows a [`Canvas`] stretched over its client area.
pub struct Window {
    inner: WindowInner,
    blit: BlitRenderer,
    canvas_size: (u32, u32),
}

impl Window {
    pub(crate) fn new(
        window: WinitWindow,
        canvas_size: (u32, u32),
        gpu_init: GpuInit,
    ) -> Result<Self> {
        let inner = WindowInnerTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()?;

        Ok(Self {
            inner,
            blit: BlitRenderer::new(),
            canvas_size,
        })
    }

    pub fn id(&self) -> WindowId {
        self.inner.with_window(|w| w.id())
    }

    /// Client area size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let size = self.inner.with_window(|w| w.inner_size());
        (size.width, size.height)
    }

    pub fn set_title(&self, title: &str) {
        self.inner.with_window(|w| w.set_title(title));
    }

    pub fn set_cursor(&self, cursor: Cursor) {
        self.inner.with_window(|w| w.set_cursor(CursorIcon::from(cursor)));
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.inner.borrow_gpu().surface_format()
    }
}

impl Surface for Window {
    fn size(&self) -> (u32, u32) {
        self.canvas_size
    }

    fn present(&mut self, canvas: &Canvas) -> Result<PresentOutcome> {
        let Self { inner, blit, .. } = self;

        // Resizes are picked up here rather than from the event stream.
        let size = inner.with_window(|w| w.inner_size());
        if size.width == 0 || size.height == 0 {
            return Ok(PresentOutcome::Skipped);
        }

        inner.with_mut(|fields| {
            let gpu = fields.gpu;
            if gpu.size() != size {
                gpu.resize(size);
            }

            let mut frame = match gpu.begin_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    let action = gpu.handle_surface_error(err);
                    if action.is_fatal() {
                        bail!("GPU surface out of memory");
                    }
                    return Ok(action.outcome());
                }
            };

            {
                let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
                let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                blit.render(&ctx, &mut target, canvas);
            }

            fields.window.pre_present_notify();
            gpu.submit(frame);
            Ok(PresentOutcome::Presented)
        })
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id())
            .field("canvas_size", &self.canvas_size)
            .finish_non_exhaustive()
    }
}
