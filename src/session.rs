//! The painting session: one frame loop owning the brush and the canvas
//!
//! Each iteration runs, in order:
//! 1. Poll events and route them to the brush
//! 2. Render: draw the brush and present (the canvas is never cleared)
//! 3. Update: clamp velocity to the canvas, then move
//! 4. Pace to the frame rate cap
//!
//! Rendering happens before the update, so input is visible one frame after
//! it changes the velocity.

use paintbrush_core::{Brush, BrushSettings, Color, Surface, SurfaceError};
use paintbrush_input::{Event, EventSource};

use crate::systems::Clock;

/// Frame loop parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Maximum iterations per second
    pub frame_rate_cap: u32,
    /// Color the canvas is filled with once at startup
    pub background_color: Color,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            frame_rate_cap: 60,
            background_color: Color::BLACK,
        }
    }
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    /// Terminal: a quit request was seen
    Closed,
}

/// Fatal error that ends the frame loop
#[derive(Debug)]
pub enum SessionError {
    Present(SurfaceError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Present(e) => write!(f, "Failed to present frame: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<SurfaceError> for SessionError {
    fn from(e: SurfaceError) -> Self {
        SessionError::Present(e)
    }
}

/// Owns the brush and the surface for the lifetime of the program
pub struct Session<S: Surface> {
    state: SessionState,
    settings: SessionSettings,
    brush: Brush,
    surface: S,
    frames: u64,
}

impl<S: Surface> Session<S> {
    /// Center a new brush on `surface` and clear it to the background color
    ///
    /// This is the only time the surface is cleared.
    pub fn initialize(
        settings: SessionSettings,
        brush_settings: BrushSettings,
        mut surface: S,
    ) -> Self {
        let (width, height) = surface.size();
        let brush = Brush::centered(brush_settings, width, height);
        surface.fill(settings.background_color);

        log::info!(
            "Session started on {}x{} canvas, brush at ({}, {}) in {}",
            width,
            height,
            brush.position().x,
            brush.position().y,
            brush.color()
        );

        Self {
            state: SessionState::Running,
            settings,
            brush,
            surface,
            frames: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Completed iterations
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Give back the surface (e.g. to inspect the final canvas)
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Run until a quit request is seen
    pub fn run<E, C>(&mut self, events: &mut E, clock: &mut C) -> Result<(), SessionError>
    where
        E: EventSource + ?Sized,
        C: Clock + ?Sized,
    {
        while self.is_running() {
            self.step(events, clock)?;
        }
        log::info!("Session closed after {} frames", self.frames);
        Ok(())
    }

    /// Run one iteration of the frame loop
    ///
    /// A quit request ends the iteration right after event polling.
    pub fn step<E, C>(&mut self, events: &mut E, clock: &mut C) -> Result<(), SessionError>
    where
        E: EventSource + ?Sized,
        C: Clock + ?Sized,
    {
        if !self.is_running() {
            return Ok(());
        }

        self.poll_events(events);
        if !self.is_running() {
            return Ok(());
        }

        self.render()?;
        self.update();
        self.pace(clock);
        self.frames += 1;
        Ok(())
    }

    /// Drain pending events and route them to the brush
    pub fn poll_events<E: EventSource + ?Sized>(&mut self, events: &mut E) {
        for event in events.poll() {
            self.handle_event(event);
        }
    }

    /// Apply one event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => {
                if self.state == SessionState::Running {
                    log::info!("Close requested");
                }
                self.state = SessionState::Closed;
            }
            Event::KeyUp(key) => {
                self.brush.on_key_up_movement(key);
            }
            Event::KeyDown(key) => {
                // A key may be bound to both movement and color
                if self.brush.is_movement_key(key) {
                    self.brush.on_key_down_movement(key);
                }
                if self.brush.is_color_key(key) {
                    if let Some(color) = self.brush.on_key_down_color(key) {
                        log::debug!("Brush color set to {}", color);
                    }
                }
            }
        }
    }

    /// Draw the brush and show the frame, without clearing first
    pub fn render(&mut self) -> Result<(), SessionError> {
        self.brush.draw(&mut self.surface);
        self.surface.present()?;
        Ok(())
    }

    /// Stop outward motion at the walls, then move
    pub fn update(&mut self) {
        let (width, height) = self.surface.size();
        self.brush.clamp_to_bounds(width, height);
        self.brush.advance();
    }

    /// Wait out the rest of the frame budget
    pub fn pace<C: Clock + ?Sized>(&mut self, clock: &mut C) {
        clock.tick(self.settings.frame_rate_cap);
    }
}
