//! Output assembly: warning flags + blink phase → indicator levels.
//!
//! | Output        | Driven high when                      |
//! |---------------|---------------------------------------|
//! | Driver LED    | driver warning AND blink on           |
//! | Passenger LED | passenger warning AND blink on        |
//! | Buzzer        | driver warning OR passenger warning   |
//!
//! The buzzer is deliberately not gated by the blink phase: it sounds
//! continuously while any warning is active.

use serde::Serialize;

use crate::app::warning::WarningFlags;
use crate::fsm::BlinkState;

/// Levels for the three indicator outputs.  Applied every tick, including
/// the all-low case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutputCommand {
    pub driver_led: bool,
    pub passenger_led: bool,
    pub buzzer: bool,
}

impl OutputCommand {
    pub const ALL_OFF: Self = Self {
        driver_led: false,
        passenger_led: false,
        buzzer: false,
    };

    pub fn assemble(flags: WarningFlags, blink: BlinkState) -> Self {
        let on = blink.is_on();
        Self {
            driver_led: flags.driver && on,
            passenger_led: flags.passenger && on,
            buzzer: flags.any(),
        }
    }
}
