//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART / USB-CDC in production).  Warning edges go out at `info`; the
//! per-tick trace is serialized as JSON at `debug` and skipped entirely
//! when debug logging is off.

use log::{debug, info, log_enabled, warn, Level};

use crate::app::events::{AppEvent, TickReport};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }

    fn trace(report: &TickReport) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        match serde_json::to_string(report) {
            Ok(json) => debug!("TICK | {json}"),
            Err(e) => warn!("TICK | trace serialization failed: {e}"),
        }
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(timing) => {
                info!(
                    "START | poll={}ms blink={}ms",
                    timing.poll_interval_ms, timing.blink_half_period_ms
                );
            }
            AppEvent::WarningRaised(seat) => {
                info!("WARN  | {seat} seatbelt unfastened");
            }
            AppEvent::WarningCleared(seat) => {
                info!("WARN  | {seat} cleared");
            }
            AppEvent::Tick(report) => Self::trace(report),
        }
    }
}
