//! Pin drivers, hardware initialisation, and the optional blink timer.

pub mod gpio;
pub mod hw_init;
#[cfg(feature = "timer-blink")]
pub mod hw_timer;
pub mod indicators;
