//! Input handling for the paintbrush toy
//!
//! Raw winit events are reduced to three platform-neutral [`Event`]s
//! (quit, key down, key up) that the session routes to the brush.

mod event;
mod key_mapper;

pub use event::{Event, EventSource, ScriptedEvents};
pub use key_mapper::KeyMapper;
