//! Outbound application events.
//!
//! The [`WarningService`](super::service::WarningService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use serde::Serialize;

use crate::app::outputs::OutputCommand;
use crate::app::warning::{Seat, WarningFlags};
use crate::config::TimingConfig;
use crate::fsm::BlinkState;
use crate::sensors::SwitchReadings;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started.
    Started(TimingConfig),

    /// A seat's warning flag went from clear to set.
    WarningRaised(Seat),

    /// A seat's warning flag went from set to clear.
    WarningCleared(Seat),

    /// Per-tick trace.
    Tick(TickReport),
}

/// Everything one control-loop iteration saw and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub now_ms: u32,
    pub readings: SwitchReadings,
    pub flags: WarningFlags,
    pub blink: BlinkState,
    pub outputs: OutputCommand,
}
