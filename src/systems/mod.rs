//! Platform systems
//!
//! Concrete implementations of the services the session consumes: the
//! window, the event source, and the frame clock.

mod clock;
mod event_pump;
mod window;

pub use clock::{Clock, FrameClock, NullClock};
pub use event_pump::{PlatformError, WinitEventSource};
pub use window::{WindowError, WindowSystem};
