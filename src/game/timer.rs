//! Per-move countdown

use std::time::Duration;

/// Countdown for the side to move
///
/// Driven by explicit [`tick`](TurnTimer::tick) calls; it never reads a clock itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTimer {
    limit: Duration,
    remaining: Duration,
    running: bool,
}

impl TurnTimer {
    /// A running timer with `limit` on the clock.
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            remaining: limit,
            running: true,
        }
    }

    /// Refill the clock for a new turn and start it.
    pub fn reset(&mut self) {
        self.remaining = self.limit;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Take `elapsed` off the clock. Returns `true` when this tick ran it out.
    ///
    /// An expired timer stops and keeps reporting zero until reset.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.running = false;
            return true;
        }
        false
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        TurnTimer::new(Duration::from_secs(crate::core::settings::MOVE_TIME_LIMIT_SECS))
    }
}
