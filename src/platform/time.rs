//! Frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Time source driving the game loop
pub trait Clock {
    /// Block until the next tick is due at `ticks_per_second`
    fn wait_for_tick(&mut self, ticks_per_second: u32);

    /// Block for a fixed wall-clock duration
    fn delay(&mut self, duration: Duration);
}

/// Time budget of one tick at `ticks_per_second` (zero counts as one)
pub fn frame_duration(ticks_per_second: u32) -> Duration {
    Duration::from_secs_f64(1.0 / ticks_per_second.max(1) as f64)
}

/// Caps the loop rate by sleeping off whatever is left of each frame
///
/// A frame that ran long is not made up for; the next one starts late and
/// the loop simply runs slower.
#[derive(Debug, Default)]
pub struct FixedRateClock {
    last_tick: Option<Instant>,
}

impl FixedRateClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining sleep for a frame that started at `last` and is `now`
    fn remaining(frame: Duration, last: Instant, now: Instant) -> Duration {
        frame.saturating_sub(now.saturating_duration_since(last))
    }
}

impl Clock for FixedRateClock {
    fn wait_for_tick(&mut self, ticks_per_second: u32) {
        let frame = frame_duration(ticks_per_second);
        if let Some(last) = self.last_tick {
            let wait = Self::remaining(frame, last, Instant::now());
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }
        self.last_tick = Some(Instant::now());
    }

    fn delay(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
