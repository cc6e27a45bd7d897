//! Platform abstraction layer
//!
//! The game loop only talks to these traits:
//! - [`Clock`]: frame pacing and blocking delays
//! - [`InputSource`]: per-tick snapshot of held keys and quit requests
//!
//! Native implementations use `std::time` and the terminal (via crossterm).

pub mod input;
pub mod time;

pub use input::{HeldKeys, InputSnapshot, InputSource, TerminalInput};
pub use time::{Clock, FixedRateClock, frame_duration};
