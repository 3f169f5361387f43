//! Window presentation for the paintbrush toy
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::BlitPipeline`] - Uploads the canvas and draws it fullscreen
//! - [`WindowSurface`] - A [`paintbrush_core::Surface`] shown in a window

pub mod context;
pub mod pipeline;
mod window_surface;

pub use context::{RenderContext, RenderError};
pub use window_surface::WindowSurface;
