//! Frame clock
//!
//! Produces the wall-time delta between consecutive ticks. The first sample
//! after construction or a `reset()` reports zero so a pause or a slow asset
//! load never turns into one giant catch-up step.

use std::time::Instant;

use crate::consts::MAX_FRAME_DT;

/// Monotonic per-tick delta source
#[derive(Debug)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds elapsed since the previous `tick()`, clamped to
    /// [`MAX_FRAME_DT`]. Returns 0.0 on the first call after `new`/`reset`.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = match self.last {
            Some(last) => now.duration_since(last).as_secs_f32().min(MAX_FRAME_DT),
            None => 0.0,
        };
        self.last = Some(now);
        delta
    }

    /// Forget the last sample; the next `tick()` reports zero.
    /// Called on pause/resume so suspended time is not replayed.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn test_tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();
        clock.tick();
        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();
        assert!(delta > 0.0);
        assert!(delta <= MAX_FRAME_DT);
    }

    #[test]
    fn test_reset_swallows_suspended_time() {
        let mut clock = FrameClock::new();
        clock.tick();
        thread::sleep(Duration::from_millis(5));
        clock.reset();
        assert_eq!(clock.tick(), 0.0);
    }
}
