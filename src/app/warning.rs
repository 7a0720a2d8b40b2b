//! Seatbelt warning evaluation.
//!
//! ```text
//! warning(seat) = ignition_on AND seat_occupied AND belt_unfastened
//! ```
//!
//! The level encodings are fixed by the harness wiring and must stay
//! exactly as below:
//!
//! | Term              | Asserted when the input reads |
//! |-------------------|-------------------------------|
//! | `ignition_on`     | ignition `Low`                |
//! | `seat_occupied`   | occupancy `Low`               |
//! | `belt_unfastened` | seatbelt `High`               |
//!
//! NOTE: with a pulled-up ignition switch, `Low` means the switch is closed,
//! which the harness documentation describes as ignition *off*.  The
//! encoding is kept as wired; see DESIGN.md before changing it.

use core::fmt;

use serde::Serialize;

use crate::sensors::{Level, SwitchReadings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Seat {
    Driver,
    Passenger,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Self::Driver, Self::Passenger];
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver => write!(f, "driver"),
            Self::Passenger => write!(f, "passenger"),
        }
    }
}

/// Per-seat warning flags, recomputed from scratch every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WarningFlags {
    pub driver: bool,
    pub passenger: bool,
}

impl WarningFlags {
    pub fn get(&self, seat: Seat) -> bool {
        match seat {
            Seat::Driver => self.driver,
            Seat::Passenger => self.passenger,
        }
    }

    pub fn any(&self) -> bool {
        self.driver || self.passenger
    }
}

/// Warning rule for a single seat.
pub const fn seat_warning(ignition: Level, occupancy: Level, seatbelt: Level) -> bool {
    ignition.is_low() && occupancy.is_low() && seatbelt.is_high()
}

/// Evaluate both seats.  Pure; each flag depends only on the shared
/// ignition input and that seat's own two inputs.
pub fn evaluate(r: &SwitchReadings) -> WarningFlags {
    WarningFlags {
        driver: seat_warning(r.ignition, r.driver_occupancy, r.driver_seatbelt),
        passenger: seat_warning(r.ignition, r.passenger_occupancy, r.passenger_seatbelt),
    }
}
