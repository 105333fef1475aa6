//! Tick-driven timers
//!
//! Timers here never spawn threads. The host advances them with the
//! elapsed time of each tick; dropping the owner stops them.

use std::time::Duration;

/// Counts down to zero and stays there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: Duration,
    remaining: Duration,
    running: bool,
}

impl Countdown {
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
            running: true,
        }
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if self.running {
            self.remaining = self.remaining.saturating_sub(elapsed);
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running && !self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Whole seconds left, rounded up so "1" shows until zero
    pub fn remaining_secs(&self) -> u64 {
        let secs = self.remaining.as_secs();
        if self.remaining.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    /// Fraction of time left, in `[0, 1]`
    pub fn fraction_left(&self) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f64() / self.total.as_secs_f64()
    }
}

/// Counts elapsed time upward while running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stopwatch {
    elapsed: Duration,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if self.running {
            self.elapsed += elapsed;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Progress round a ring of `full_turn` seconds, capped at one turn
    pub fn ring_progress(&self, full_turn: u64) -> f64 {
        if full_turn == 0 {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / full_turn as f64).min(1.0)
    }
}

/// A flag that clears itself after a fixed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flash {
    left: Option<Duration>,
}

impl Flash {
    pub fn trigger(&mut self, duration: Duration) {
        self.left = Some(duration);
    }

    pub fn clear(&mut self) {
        self.left = None;
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(left) = self.left {
            let left = left.saturating_sub(elapsed);
            self.left = if left.is_zero() { None } else { Some(left) };
        }
    }

    pub fn is_active(&self) -> bool {
        self.left.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_rounds_up_and_stops_at_zero() {
        let mut countdown = Countdown::new(Duration::from_secs(15));
        assert_eq!(countdown.remaining_secs(), 15);

        countdown.tick(Duration::from_millis(100));
        assert_eq!(countdown.remaining_secs(), 15);

        countdown.tick(Duration::from_secs(30));
        assert_eq!(countdown.remaining_secs(), 0);
        assert!(countdown.is_expired());
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_stopped_countdown_freezes() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        countdown.tick(Duration::from_secs(4));
        countdown.stop();
        countdown.tick(Duration::from_secs(4));
        assert_eq!(countdown.remaining_secs(), 6);
    }

    #[test]
    fn test_stopwatch_only_counts_while_running() {
        let mut watch = Stopwatch::new();
        watch.tick(Duration::from_secs(5));
        assert_eq!(watch.elapsed_secs(), 0);

        watch.start();
        watch.tick(Duration::from_secs(5));
        watch.pause();
        watch.tick(Duration::from_secs(5));
        assert_eq!(watch.elapsed_secs(), 5);

        watch.reset();
        assert_eq!(watch.elapsed_secs(), 0);
        assert!(!watch.is_running());
    }

    #[test]
    fn test_ring_progress_caps_at_full_turn() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.tick(Duration::from_secs(30));
        assert_eq!(watch.ring_progress(60), 0.5);
        watch.tick(Duration::from_secs(90));
        assert_eq!(watch.ring_progress(60), 1.0);
    }

    #[test]
    fn test_flash_clears_itself() {
        let mut flash = Flash::default();
        flash.trigger(Duration::from_secs(1));
        flash.tick(Duration::from_millis(600));
        assert!(flash.is_active());
        flash.tick(Duration::from_millis(600));
        assert!(!flash.is_active());
    }
}
