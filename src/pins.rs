//! GPIO pin assignments for the BeltGuard controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Switch inputs (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// Ignition switch.
pub const IGNITION_GPIO: i32 = 4;
/// Driver seat occupancy switch.
pub const DRIVER_OCCUPANCY_GPIO: i32 = 5;
/// Driver seatbelt buckle switch.
pub const DRIVER_SEATBELT_GPIO: i32 = 6;
/// Passenger seat occupancy switch.
pub const PASSENGER_OCCUPANCY_GPIO: i32 = 7;
/// Passenger seatbelt buckle switch.
pub const PASSENGER_SEATBELT_GPIO: i32 = 15;

pub const INPUT_GPIOS: [i32; 5] = [
    IGNITION_GPIO,
    DRIVER_OCCUPANCY_GPIO,
    DRIVER_SEATBELT_GPIO,
    PASSENGER_OCCUPANCY_GPIO,
    PASSENGER_SEATBELT_GPIO,
];

// ---------------------------------------------------------------------------
// Indicator outputs (push-pull, low at boot)
// ---------------------------------------------------------------------------

pub const DRIVER_WARNING_LED_GPIO: i32 = 16;
pub const PASSENGER_WARNING_LED_GPIO: i32 = 17;
/// Shared cabin buzzer (active HIGH).
pub const BUZZER_GPIO: i32 = 18;

pub const OUTPUT_GPIOS: [i32; 3] = [
    DRIVER_WARNING_LED_GPIO,
    PASSENGER_WARNING_LED_GPIO,
    BUZZER_GPIO,
];
