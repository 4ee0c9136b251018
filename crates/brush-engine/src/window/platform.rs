use std::time::Duration;

use anyhow::{bail, Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as WinitWindow, WindowAttributes, WindowId};

use crate::device::GpuInit;
use crate::event::{
    translate_window_event, CanvasMapping, Event, EventQueue, EventSource, PointerState,
};

use super::config::WindowConfig;
use super::window::Window;

/// Pumps spent waiting for the platform to hand out a window.
const OPEN_WINDOW_ATTEMPTS: u32 = 100;
const OPEN_WINDOW_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Host event loop and the engine's [`EventSource`].
///
/// `poll` never blocks: the first poll of a frame pumps pending host events
/// into an internal queue, later polls drain it.
pub struct Platform {
    event_loop: EventLoop<()>,
    queue: EventQueue,
    pointer: PointerState,
    mapping: CanvasMapping,
    pumped: bool,
    exited: bool,
}

impl Platform {
    pub fn new() -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        Ok(Self {
            event_loop,
            queue: EventQueue::new(),
            pointer: PointerState::default(),
            mapping: CanvasMapping::identity(1, 1),
            pumped: false,
            exited: false,
        })
    }

    /// Opens a window with default GPU settings.
    pub fn open_window(&mut self, config: WindowConfig) -> Result<Window> {
        self.open_window_with(config, GpuInit::default())
    }

    pub fn open_window_with(&mut self, config: WindowConfig, gpu_init: GpuInit) -> Result<Window> {
        anyhow::ensure!(
            config.width > 0 && config.height > 0,
            "window size must be non-zero, got {}x{}",
            config.width,
            config.height
        );
        if self.exited {
            bail!("host event loop has already exited");
        }

        let attrs = WinitWindow::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
            .with_resizable(config.resizable);

        let window = self.create_window(attrs)?;
        let physical = window.inner_size();
        log::info!(
            "opened window {:?} \"{}\" ({}x{} physical)",
            window.id(),
            config.title,
            physical.width,
            physical.height
        );

        self.mapping = CanvasMapping {
            physical: (physical.width, physical.height),
            canvas: (config.width, config.height),
        };

        Window::new(window, (config.width, config.height), gpu_init)
            .with_context(|| format!("failed to initialize GPU for window \"{}\"", config.title))
    }

    /// Windows can only be created from inside an event loop callback, so the
    /// loop is pumped until the handler has produced one.
    fn create_window(&mut self, attrs: WindowAttributes) -> Result<WinitWindow> {
        let mut handler = PumpHandler {
            queue: &mut self.queue,
            pointer: &mut self.pointer,
            mapping: &mut self.mapping,
            pending: Some(attrs),
            created: None,
        };

        for _ in 0..OPEN_WINDOW_ATTEMPTS {
            let status = self
                .event_loop
                .pump_app_events(Some(OPEN_WINDOW_PUMP_TIMEOUT), &mut handler);

            if let Some(created) = handler.created.take() {
                return created;
            }
            if let PumpStatus::Exit(code) = status {
                self.exited = true;
                bail!("host event loop exited with code {code} before a window was created");
            }
        }

        bail!("timed out waiting for the platform to create a window")
    }

    fn pump(&mut self) {
        if self.exited {
            self.queue.push(Event::Quit);
            return;
        }

        let mut handler = PumpHandler {
            queue: &mut self.queue,
            pointer: &mut self.pointer,
            mapping: &mut self.mapping,
            pending: None,
            created: None,
        };

        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut handler);

        if let PumpStatus::Exit(code) = status {
            log::info!("host event loop exited with code {code}");
            self.exited = true;
            self.queue.push(Event::Quit);
        }
    }
}

impl EventSource for Platform {
    fn poll(&mut self) -> Option<Event> {
        if self.queue.is_empty() && !self.pumped {
            self.pump();
            self.pumped = true;
        }

        let event = self.queue.poll();
        if event.is_none() {
            self.pumped = false;
        }
        event
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform")
            .field("queued", &self.queue.len())
            .field("pointer", &self.pointer)
            .field("mapping", &self.mapping)
            .field("exited", &self.exited)
            .finish_non_exhaustive()
    }
}

struct PumpHandler<'a> {
    queue: &'a mut EventQueue,
    pointer: &'a mut PointerState,
    mapping: &'a mut CanvasMapping,

    pending: Option<WindowAttributes>,
    created: Option<Result<WinitWindow>>,
}

impl PumpHandler<'_> {
    fn create_pending(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(attrs) = self.pending.take() {
            self.created = Some(
                event_loop
                    .create_window(attrs)
                    .context("failed to create window"),
            );
        }
    }
}

impl ApplicationHandler for PumpHandler<'_> {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, _cause: StartCause) {
        self.create_pending(event_loop);
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            self.mapping.physical = (size.width, size.height);
        }

        if let Some(ev) = translate_window_event(self.pointer, *self.mapping, &event) {
            if ev.is_quit() {
                log::info!("quit requested");
            }
            self.queue.push(ev);
        }
    }
}
