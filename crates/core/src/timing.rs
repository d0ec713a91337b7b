//! Gravity cadence.
//!
//! Gravity is driven by accumulating frame deltas rather than a scheduled
//! timer. Callers must feed deltas from a monotonic clock.

use std::time::Duration;

use crate::types::{BASE_GRAVITY_MS, GRAVITY_FLOOR_MS, GRAVITY_STEP_MS};

/// Milliseconds between gravity ticks at `level`.
///
/// `max(80, 800 - (level - 1) * 60)`
pub fn gravity_delay_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(GRAVITY_STEP_MS);
    BASE_GRAVITY_MS
        .saturating_sub(speedup)
        .max(GRAVITY_FLOOR_MS)
}

pub fn gravity_delay(level: u32) -> Duration {
    Duration::from_millis(gravity_delay_ms(level) as u64)
}

/// Accumulates elapsed time and fires once per gravity delay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GravityTimer {
    accumulated: Duration,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed` and report whether a gravity tick is due.
    ///
    /// On fire the accumulator resets to zero; any overshoot is dropped.
    pub fn advance(&mut self, elapsed: Duration, level: u32) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated >= gravity_delay(level) {
            self.accumulated = Duration::ZERO;
            return true;
        }
        false
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
