//! embedded-hal pins over raw GPIO numbers.
//!
//! Thin handles that route `embedded_hal::digital` calls to the
//! [`hw_init`](super::hw_init) register helpers.  The pin must have been
//! configured by `init_peripherals()` first; after that, reads and writes
//! cannot fail, so the error type is [`Infallible`].

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::drivers::hw_init;

/// Configured digital input.
#[derive(Debug)]
pub struct GpioInput {
    gpio: i32,
}

impl GpioInput {
    pub(crate) fn new(gpio: i32) -> Self {
        Self { gpio }
    }
}

impl ErrorType for GpioInput {
    type Error = Infallible;
}

impl InputPin for GpioInput {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(hw_init::gpio_read(self.gpio))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!hw_init::gpio_read(self.gpio))
    }
}

/// Configured push-pull output.  Remembers the last level written so it
/// can report it back without a register read.
#[derive(Debug)]
pub struct GpioOutput {
    gpio: i32,
    high: bool,
}

impl GpioOutput {
    pub(crate) fn new(gpio: i32) -> Self {
        Self { gpio, high: false }
    }
}

impl ErrorType for GpioOutput {
    type Error = Infallible;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        hw_init::gpio_write(self.gpio, false);
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        hw_init::gpio_write(self.gpio, true);
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for GpioOutput {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high)
    }
}
