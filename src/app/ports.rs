//! Port traits: the boundary between the warning logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ WarningService (domain)
//! ```
//!
//! Driven adapters (switch bank, indicator outputs, clock, event sink)
//! implement these traits.  [`WarningService`](super::service::WarningService)
//! consumes them via generics, so the domain core never touches GPIO
//! registers directly.

use crate::app::outputs::OutputCommand;
use crate::sensors::SwitchReadings;

// ───────────────────────────────────────────────────────────────
// Switch port (hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: sample all five switches.  Infallible by contract;
/// implementations absorb pin faults themselves.
pub trait SwitchPort {
    fn sample(&mut self) -> SwitchReadings;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: drive the two warning LEDs and the buzzer.
pub trait IndicatorPort {
    /// Drive all three outputs to the commanded levels.  Called every tick
    /// whether or not anything changed.
    fn apply(&mut self, cmd: &OutputCommand);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Free-running millisecond tick.  Only differences between two readings
/// are meaningful; the counter wraps at `u32::MAX`.
pub trait MonotonicClock {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
