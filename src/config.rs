//! Timing configuration.
//!
//! Both intervals are fixed at build time.  [`TimingConfig`] exists so the
//! control loop and its tests can be handed explicit values instead of
//! reaching for the constants directly.

use serde::{Deserialize, Serialize};

/// Delay between control-loop iterations (milliseconds).
pub const POLL_INTERVAL_MS: u32 = 100;

/// Time the warning LEDs spend in each blink phase (milliseconds).
pub const BLINK_HALF_PERIOD_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Sleep at the end of every loop iteration.
    pub poll_interval_ms: u32,
    /// Minimum elapsed time between two blink toggles.
    pub blink_half_period_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_MS,
            blink_half_period_ms: BLINK_HALF_PERIOD_MS,
        }
    }
}

impl TimingConfig {
    /// Reject timings the control loop cannot honour.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be non-zero");
        }
        if self.blink_half_period_ms == 0 {
            return Err("blink_half_period_ms must be non-zero");
        }
        if self.blink_half_period_ms < self.poll_interval_ms {
            return Err("blink half-period shorter than the poll interval");
        }
        Ok(())
    }
}
