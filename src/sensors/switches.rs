//! Switch bank: samples the five cabin switches once per tick.
//!
//! No debounce and no history: each read is authoritative for the tick it
//! was taken in.  A pin that fails to read at runtime is reported as its
//! pulled-up idle level (`High`, switch open) so the loop keeps running.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::app::ports::SwitchPort;
use crate::error::{Error, Result};
use crate::sensors::{Level, SwitchId, SwitchReadings};

pub struct SwitchBank<P> {
    ignition: P,
    driver_occupancy: P,
    driver_seatbelt: P,
    passenger_occupancy: P,
    passenger_seatbelt: P,
}

impl<P: InputPin> SwitchBank<P> {
    pub fn new(
        ignition: P,
        driver_occupancy: P,
        driver_seatbelt: P,
        passenger_occupancy: P,
        passenger_seatbelt: P,
    ) -> Self {
        Self {
            ignition,
            driver_occupancy,
            driver_seatbelt,
            passenger_occupancy,
            passenger_seatbelt,
        }
    }

    fn pin_mut(&mut self, id: SwitchId) -> &mut P {
        match id {
            SwitchId::Ignition => &mut self.ignition,
            SwitchId::DriverOccupancy => &mut self.driver_occupancy,
            SwitchId::DriverSeatbelt => &mut self.driver_seatbelt,
            SwitchId::PassengerOccupancy => &mut self.passenger_occupancy,
            SwitchId::PassengerSeatbelt => &mut self.passenger_seatbelt,
        }
    }

    /// Read every input once.  Fails with a bitmask of the inputs that
    /// could not be read; run this before entering the control loop.
    ///
    /// Only pins with a fallible error type can fail here.  On the board,
    /// [`GpioInput`](crate::drivers::gpio::GpioInput) reads are
    /// `Infallible`, so this always succeeds; pin misconfiguration is caught
    /// by the `gpio_config` return code in `init_peripherals()`.  Neither
    /// detects broken harness wiring.
    pub fn self_test(&mut self) -> Result<SwitchReadings> {
        let mut readings = SwitchReadings::IDLE;
        let mut failed = 0u8;
        for id in SwitchId::ALL {
            match self.pin_mut(id).is_high() {
                Ok(high) => readings.set_level(id, Level::from_high(high)),
                Err(_) => failed |= id.mask(),
            }
        }
        if failed != 0 {
            return Err(Error::InputsUnreadable(failed));
        }
        Ok(readings)
    }

    fn read_one(&mut self, id: SwitchId) -> Level {
        match self.pin_mut(id).is_high() {
            Ok(high) => Level::from_high(high),
            Err(e) => {
                warn!("switches: {id} read failed ({e:?}), assuming open");
                Level::High
            }
        }
    }
}

impl<P: InputPin> SwitchPort for SwitchBank<P> {
    fn sample(&mut self) -> SwitchReadings {
        SwitchReadings {
            ignition: self.read_one(SwitchId::Ignition),
            driver_occupancy: self.read_one(SwitchId::DriverOccupancy),
            driver_seatbelt: self.read_one(SwitchId::DriverSeatbelt),
            passenger_occupancy: self.read_one(SwitchId::PassengerOccupancy),
            passenger_seatbelt: self.read_one(SwitchId::PassengerSeatbelt),
        }
    }
}
