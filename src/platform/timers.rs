//! Repeating timers
//!
//! A timer fires once per elapsed interval and re-arms itself. Leftover time
//! carries into the next call, so a 50 ms timer fed 30 ms twice fires once.

use crate::consts::{COUNTDOWN_INTERVAL_MS, FRAME_INTERVAL_MS};

/// Most firings reported by one `advance` call
pub const MAX_CATCH_UP: u32 = 8;

/// A self re-arming interval timer
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval_ms: f64,
    accumulated_ms: f64,
}

impl RepeatingTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Add elapsed time and return how many times the timer fired
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.accumulated_ms += elapsed_ms;
        }

        let mut fired = 0;
        while self.accumulated_ms >= self.interval_ms && fired < MAX_CATCH_UP {
            self.accumulated_ms -= self.interval_ms;
            fired += 1;
        }
        if fired == MAX_CATCH_UP {
            // Drop the backlog instead of replaying it later
            self.accumulated_ms = self.accumulated_ms.min(self.interval_ms);
        }
        fired
    }

    /// Forget any partial interval
    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }
}

/// Firings from one `TickClock::advance` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticks {
    pub frames: u32,
    pub seconds: u32,
}

/// The frame timer (50 ms) and the countdown timer (1 s), driven together
#[derive(Debug, Clone)]
pub struct TickClock {
    frame: RepeatingTimer,
    countdown: RepeatingTimer,
    last_time_ms: Option<f64>,
}

impl Default for TickClock {
    fn default() -> Self {
        Self {
            frame: RepeatingTimer::new(FRAME_INTERVAL_MS),
            countdown: RepeatingTimer::new(COUNTDOWN_INTERVAL_MS),
            last_time_ms: None,
        }
    }
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute timestamp; the first call only sets the origin
    pub fn advance_to(&mut self, now_ms: f64) -> Ticks {
        let elapsed = match self.last_time_ms {
            Some(last) => now_ms - last,
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);
        self.advance(elapsed)
    }

    /// Feed a time delta
    pub fn advance(&mut self, elapsed_ms: f64) -> Ticks {
        Ticks {
            frames: self.frame.advance(elapsed_ms),
            seconds: self.countdown.advance(elapsed_ms),
        }
    }

    /// Restart both intervals from zero (on a new round)
    pub fn reset(&mut self) {
        self.frame.reset();
        self.countdown.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_per_interval() {
        let mut timer = RepeatingTimer::new(50.0);
        assert_eq!(timer.advance(30.0), 0);
        assert_eq!(timer.advance(30.0), 1);
        assert_eq!(timer.advance(40.0), 1);
        assert_eq!(timer.advance(100.0), 2);
    }

    #[test]
    fn test_timer_caps_catch_up() {
        let mut timer = RepeatingTimer::new(50.0);
        assert_eq!(timer.advance(10_000.0), MAX_CATCH_UP);
        // Backlog was dropped
        assert!(timer.advance(0.0) <= 1);
    }

    #[test]
    fn test_timer_ignores_bad_deltas() {
        let mut timer = RepeatingTimer::new(50.0);
        assert_eq!(timer.advance(-100.0), 0);
        assert_eq!(timer.advance(f64::NAN), 0);
        assert_eq!(timer.advance(50.0), 1);
    }

    #[test]
    fn test_clock_runs_both_timers() {
        let mut clock = TickClock::new();
        let mut frames = 0;
        let mut seconds = 0;
        for _ in 0..100 {
            let ticks = clock.advance(50.0);
            frames += ticks.frames;
            seconds += ticks.seconds;
        }
        assert_eq!(frames, 100);
        assert_eq!(seconds, 5);
    }

    #[test]
    fn test_clock_first_timestamp_is_origin() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance_to(123_456.0), Ticks::default());
        assert_eq!(clock.advance_to(123_506.0), Ticks { frames: 1, seconds: 0 });
    }
}
