//! Winit event source
//!
//! The session owns the frame loop, so winit is driven in polling mode:
//! every `poll` pumps the OS event queue once without blocking and returns
//! whatever arrived.

use std::sync::Arc;
use std::time::Duration;
use paintbrush_input::{Event, EventSource, KeyMapper};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};

use crate::config::WindowConfig;
use crate::systems::window::{WindowError, WindowSystem};

/// How long to wait for the platform to deliver `resumed` at startup
const WINDOW_OPEN_TIMEOUT: Duration = Duration::from_secs(5);
const WINDOW_OPEN_PUMP: Duration = Duration::from_millis(10);

/// Errors setting up the platform layer
#[derive(Debug)]
pub enum PlatformError {
    /// The OS event loop could not be created
    EventLoop(String),
    /// The window could not be created
    Window(WindowError),
    /// The event loop never became ready to create a window
    WindowTimeout,
    /// The event loop exited before the window was opened
    ExitedEarly,
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::EventLoop(msg) => write!(f, "Event loop creation failed: {}", msg),
            PlatformError::Window(e) => write!(f, "{}", e),
            PlatformError::WindowTimeout => write!(f, "Timed out waiting to open the window"),
            PlatformError::ExitedEarly => write!(f, "Event loop exited before the window opened"),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<WindowError> for PlatformError {
    fn from(e: WindowError) -> Self {
        PlatformError::Window(e)
    }
}

/// Receives winit callbacks during a pump and queues mapped events
struct PumpHandler {
    window_config: WindowConfig,
    window: Option<WindowSystem>,
    window_error: Option<WindowError>,
    mapper: KeyMapper,
    pending: Vec<Event>,
}

impl ApplicationHandler for PumpHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() && self.window_error.is_none() {
            match WindowSystem::create(event_loop, &self.window_config) {
                Ok(window) => self.window = Some(window),
                Err(e) => self.window_error = Some(e),
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(event) = self.mapper.map_window_event(&event) {
            self.pending.push(event);
        }
    }
}

/// [`EventSource`] backed by a winit event loop
pub struct WinitEventSource {
    event_loop: EventLoop<()>,
    handler: PumpHandler,
}

impl WinitEventSource {
    /// Create the OS event loop
    pub fn new(window_config: WindowConfig, mapper: KeyMapper) -> Result<Self, PlatformError> {
        let event_loop = EventLoop::new().map_err(|e| PlatformError::EventLoop(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        Ok(Self {
            event_loop,
            handler: PumpHandler {
                window_config,
                window: None,
                window_error: None,
                mapper,
                pending: Vec::new(),
            },
        })
    }

    /// Pump until the platform lets us create the window, then return it
    ///
    /// Input that arrives meanwhile is kept for the first `poll`.
    pub fn open_window(&mut self) -> Result<Arc<Window>, PlatformError> {
        let mut waited = Duration::ZERO;
        loop {
            if let Some(window) = &self.handler.window {
                return Ok(window.window().clone());
            }
            if let Some(e) = self.handler.window_error.take() {
                return Err(e.into());
            }
            if waited >= WINDOW_OPEN_TIMEOUT {
                return Err(PlatformError::WindowTimeout);
            }

            let status = self
                .event_loop
                .pump_app_events(Some(WINDOW_OPEN_PUMP), &mut self.handler);
            if let PumpStatus::Exit(_) = status {
                return Err(PlatformError::ExitedEarly);
            }
            waited += WINDOW_OPEN_PUMP;
        }
    }
}

impl EventSource for WinitEventSource {
    fn poll(&mut self) -> Vec<Event> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);
        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited with code {}", code);
            self.handler.pending.push(Event::Quit);
        }
        std::mem::take(&mut self.handler.pending)
    }
}
