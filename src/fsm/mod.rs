//! Warning-LED blink oscillator.
//!
//! ```text
//!            elapsed >= half_period
//!   ┌──────┐ ─────────────────────▶ ┌─────┐
//!   │ Off  │                        │ On  │
//!   └──────┘ ◀───────────────────── └─────┘
//!            elapsed >= half_period
//! ```
//!
//! A single free-running oscillator shared by both warning LEDs.  It runs
//! whether or not any warning is active, so the LEDs always pick up the
//! current phase rather than restarting it.
//!
//! Two sources implement [`BlinkSource`]:
//!
//! - [`BlinkTimer`]: polled from the control loop; toggles when the loop
//!   observes that a half-period has elapsed.
//! - [`shared::SharedBlink`]: advanced by a periodic hardware timer; the
//!   loop only reads the phase.

pub mod shared;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BlinkState {
    On,
    #[default]
    Off,
}

impl BlinkState {
    pub const fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Anything the control loop can ask for the current blink phase.
pub trait BlinkSource {
    /// Advance (if this source is polled) and return the phase for `now_ms`.
    fn poll(&mut self, now_ms: u32) -> BlinkState;
}

/// Polled blink oscillator.
///
/// `now_ms` is a free-running millisecond tick; elapsed time is computed
/// with wrapping subtraction so the tick counter may roll over.
#[derive(Debug, Clone)]
pub struct BlinkTimer {
    state: BlinkState,
    last_toggle_ms: u32,
    half_period_ms: u32,
}

impl BlinkTimer {
    pub fn new(half_period_ms: u32) -> Self {
        Self {
            state: BlinkState::Off,
            last_toggle_ms: 0,
            half_period_ms,
        }
    }

    /// Toggle if a full half-period has elapsed since the last toggle.
    pub fn update(&mut self, now_ms: u32) -> BlinkState {
        if now_ms.wrapping_sub(self.last_toggle_ms) >= self.half_period_ms {
            self.state = self.state.toggled();
            self.last_toggle_ms = now_ms;
        }
        self.state
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    pub fn last_toggle_ms(&self) -> u32 {
        self.last_toggle_ms
    }
}

impl BlinkSource for BlinkTimer {
    fn poll(&mut self, now_ms: u32) -> BlinkState {
        self.update(now_ms)
    }
}
