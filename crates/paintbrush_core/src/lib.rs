//! Core types for the paintbrush toy
//!
//! This crate has no platform dependencies:
//!
//! - [`Color`] - RGBA color with name resolution
//! - [`Key`] - Platform-neutral key identifier
//! - [`MovementBindings`] / [`Palette`] - Key bindings for the brush
//! - [`Brush`] - The moving, colored rectangle
//! - [`Surface`] - Drawing contract, implemented by [`Canvas`]

mod bindings;
mod brush;
mod color;
mod geometry;
mod key;
mod surface;

pub use bindings::{Axis, Direction, MovementBindings, Palette};
pub use brush::{Brush, BrushSettings, Velocity, DEFAULT_SPEED};
pub use color::{Color, ParseColorError};
pub use geometry::{Point, Rect};
pub use key::{Key, ParseKeyError};
pub use surface::{Canvas, Surface, SurfaceError};
