//! Frame pacing
//!
//! The frame-rate cap is a soft limit: a slow frame just makes the loop
//! slower, there is no frame skipping or catch-up.

use std::time::{Duration, Instant};

/// Blocks the frame loop to cap its rate
pub trait Clock {
    /// Sleep out the rest of the current frame's budget
    ///
    /// Returns the time since the previous tick. A `target_fps` of zero
    /// means uncapped.
    fn tick(&mut self, target_fps: u32) -> Duration;
}

/// Wall-clock pacing with `std::thread::sleep`
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Time budget of one frame at `target_fps`
    pub fn frame_budget(target_fps: u32) -> Option<Duration> {
        if target_fps == 0 {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / target_fps as f64))
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        if let Some(budget) = Self::frame_budget(target_fps) {
            let elapsed = self.last_tick.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }

        let now = Instant::now();
        let frame_time = now - self.last_tick;
        self.last_tick = now;
        frame_time
    }
}

/// Clock that never sleeps and records how it was called
#[derive(Debug, Default)]
pub struct NullClock {
    ticks: u64,
    last_target: Option<u32>,
}

impl NullClock {
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_target(&self) -> Option<u32> {
        self.last_target
    }
}

impl Clock for NullClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        self.ticks += 1;
        self.last_target = Some(target_fps);
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        let budget = FrameClock::frame_budget(60).unwrap();
        assert!(budget > Duration::from_millis(16) && budget < Duration::from_millis(17));
        assert_eq!(FrameClock::frame_budget(0), None);
    }

    #[test]
    fn test_tick_caps_rate() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        for _ in 0..3 {
            clock.tick(100);
        }
        // Three 10ms frames
        assert!(start.elapsed() >= Duration::from_millis(29));
    }

    #[test]
    fn test_slow_frame_not_delayed_further() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(30));
        let before = Instant::now();
        let frame_time = clock.tick(100);
        assert!(frame_time >= Duration::from_millis(30));
        assert!(before.elapsed() < Duration::from_millis(10));
    }

    #[test]
    fn test_null_clock_records() {
        let mut clock = NullClock::default();
        assert_eq!(clock.tick(60), Duration::ZERO);
        assert_eq!(clock.ticks(), 1);
        assert_eq!(clock.last_target(), Some(60));
    }
}
