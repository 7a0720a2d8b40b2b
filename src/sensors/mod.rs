//! Cabin switch inputs.
//!
//! All five switches are wired active-low against an internal pull-up: an
//! open switch reads [`Level::High`], a closed (engaged) switch pulls the
//! line to [`Level::Low`].  Readings are sampled fresh every tick and never
//! stored.

pub mod switches;

use core::fmt;

use serde::Serialize;

/// Electrical level of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    /// Held near ground ("RESET").  Switch closed.
    Low,
    /// Held near supply ("SET").  Pull-up idle, switch open.
    High,
}

impl Level {
    pub const fn from_high(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    pub const fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

/// The five monitored inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum SwitchId {
    Ignition = 0b0000_0001,
    DriverOccupancy = 0b0000_0010,
    DriverSeatbelt = 0b0000_0100,
    PassengerOccupancy = 0b0000_1000,
    PassengerSeatbelt = 0b0001_0000,
}

impl SwitchId {
    /// Sampling order.
    pub const ALL: [SwitchId; 5] = [
        Self::Ignition,
        Self::DriverOccupancy,
        Self::DriverSeatbelt,
        Self::PassengerOccupancy,
        Self::PassengerSeatbelt,
    ];

    /// Return the bitmask for this switch.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Decode a bitmask back into the switches it names.
    pub fn from_mask(mask: u8) -> impl Iterator<Item = SwitchId> {
        Self::ALL.into_iter().filter(move |id| mask & id.mask() != 0)
    }
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignition => write!(f, "ignition"),
            Self::DriverOccupancy => write!(f, "driver occupancy"),
            Self::DriverSeatbelt => write!(f, "driver seatbelt"),
            Self::PassengerOccupancy => write!(f, "passenger occupancy"),
            Self::PassengerSeatbelt => write!(f, "passenger seatbelt"),
        }
    }
}

/// One tick's worth of raw switch levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwitchReadings {
    pub ignition: Level,
    pub driver_occupancy: Level,
    pub driver_seatbelt: Level,
    pub passenger_occupancy: Level,
    pub passenger_seatbelt: Level,
}

impl SwitchReadings {
    /// Every line at its pulled-up idle level.
    pub const IDLE: Self = Self {
        ignition: Level::High,
        driver_occupancy: Level::High,
        driver_seatbelt: Level::High,
        passenger_occupancy: Level::High,
        passenger_seatbelt: Level::High,
    };

    pub fn level(&self, id: SwitchId) -> Level {
        match id {
            SwitchId::Ignition => self.ignition,
            SwitchId::DriverOccupancy => self.driver_occupancy,
            SwitchId::DriverSeatbelt => self.driver_seatbelt,
            SwitchId::PassengerOccupancy => self.passenger_occupancy,
            SwitchId::PassengerSeatbelt => self.passenger_seatbelt,
        }
    }

    pub fn set_level(&mut self, id: SwitchId, level: Level) {
        let slot = match id {
            SwitchId::Ignition => &mut self.ignition,
            SwitchId::DriverOccupancy => &mut self.driver_occupancy,
            SwitchId::DriverSeatbelt => &mut self.driver_seatbelt,
            SwitchId::PassengerOccupancy => &mut self.passenger_occupancy,
            SwitchId::PassengerSeatbelt => &mut self.passenger_seatbelt,
        };
        *slot = level;
    }
}
