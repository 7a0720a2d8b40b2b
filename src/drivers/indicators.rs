//! Warning indicators: two seat LEDs and the shared buzzer.
//!
//! A dumb actuator: it drives whatever [`OutputCommand`] it is given, every
//! tick, without edge detection.  A failed write is logged and the
//! remaining outputs are still driven.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

use crate::app::outputs::OutputCommand;
use crate::app::ports::IndicatorPort;

pub struct Indicators<O> {
    driver_led: O,
    passenger_led: O,
    buzzer: O,
}

impl<O: OutputPin> Indicators<O> {
    pub fn new(driver_led: O, passenger_led: O, buzzer: O) -> Self {
        Self {
            driver_led,
            passenger_led,
            buzzer,
        }
    }

    pub fn all_off(&mut self) {
        self.apply(&OutputCommand::ALL_OFF);
    }

    fn drive(pin: &mut O, name: &str, on: bool) {
        if let Err(e) = pin.set_state(PinState::from(on)) {
            warn!("indicators: {name} write failed ({e:?})");
        }
    }
}

impl<O: OutputPin> IndicatorPort for Indicators<O> {
    fn apply(&mut self, cmd: &OutputCommand) {
        Self::drive(&mut self.driver_led, "driver LED", cmd.driver_led);
        Self::drive(&mut self.passenger_led, "passenger LED", cmd.passenger_led);
        Self::drive(&mut self.buzzer, "buzzer", cmd.buzzer);
    }
}
