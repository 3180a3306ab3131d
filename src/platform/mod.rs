//! Platform abstraction layer
//!
//! The pieces a host supplies around the simulation core:
//! - Time (monotonic milliseconds)
//! - Frame scheduling (~16ms repeating callback, cancelable)
//! - Session glue tying input, frames and high score storage together

pub mod clock;
pub mod scheduler;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{FrameScheduler, FrameTimer};
pub use session::Session;
