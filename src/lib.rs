//! Paintbrush - a minimal drawing toy
//!
//! A colored rectangle is steered with the arrow keys and leaves a trail,
//! because the canvas is never cleared between frames. B/G/R/Y/Space pick
//! the brush color.
//!
//! The library exposes the configuration, the frame loop ([`session::Session`]),
//! and the winit-backed platform systems, so the loop can also be driven
//! headless in tests.

pub mod config;
pub mod session;
pub mod systems;

pub use config::AppConfig;
pub use session::{Session, SessionError, SessionSettings, SessionState};
