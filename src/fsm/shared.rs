//! Interrupt-safe blink phase.
//!
//! When the blink oscillator is advanced from a periodic timer callback
//! instead of the control loop, the phase and its toggle time can no longer
//! live in a plain struct.  They collapse into one atomic generation
//! counter: the callback increments it once per half-period and the phase
//! is `On` whenever the generation is odd.  Generation 0 is `Off`.

use core::sync::atomic::{AtomicU32, Ordering};

use super::{BlinkSource, BlinkState};

pub struct SharedBlink {
    generation: AtomicU32,
}

impl SharedBlink {
    pub const fn new() -> Self {
        Self {
            generation: AtomicU32::new(0),
        }
    }

    /// Flip the phase.  Safe to call from timer or interrupt context.
    pub fn advance(&self) {
        self.generation.fetch_add(1, Ordering::Release);
    }

    pub fn generation(&self) -> u32 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn state(&self) -> BlinkState {
        if self.generation() & 1 == 1 {
            BlinkState::On
        } else {
            BlinkState::Off
        }
    }
}

impl Default for SharedBlink {
    fn default() -> Self {
        Self::new()
    }
}

/// Blink phase shared with the hardware timer callback.
pub static TIMER_BLINK: SharedBlink = SharedBlink::new();

impl BlinkSource for &SharedBlink {
    /// Timer-driven: `now_ms` is ignored, the phase is whatever the
    /// callback last published.
    fn poll(&mut self, _now_ms: u32) -> BlinkState {
        self.state()
    }
}
