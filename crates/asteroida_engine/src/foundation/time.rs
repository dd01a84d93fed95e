//! Time management utilities

use std::time::{Duration, Instant};

/// Countdown timer gating how often an action may recur.
///
/// The remaining time keeps decreasing past zero; only the `<= 0` check
/// decides readiness, so there is no clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Cooldown {
    duration: f32,
    remaining: f32,
}

impl Cooldown {
    /// Create a cooldown that starts ready
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: 0.0,
        }
    }

    /// Advance the timer by `delta_time` seconds
    pub fn tick(&mut self, delta_time: f32) {
        self.remaining -= delta_time;
    }

    /// Whether the action may fire now
    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Re-arm the timer if it is ready. Returns true when the action fires.
    pub fn try_trigger(&mut self) -> bool {
        if self.is_ready() {
            self.remaining = self.duration;
            true
        } else {
            false
        }
    }

    /// Time left until the next trigger (may be negative)
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Configured cooldown duration
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed += start.elapsed();
            self.start_time = None;
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        let current_elapsed = self
            .start_time
            .map_or(Duration::ZERO, |start| start.elapsed());
        self.elapsed + current_elapsed
    }

    /// Get the elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }
}
