//! Unified error types for the BeltGuard firmware.
//!
//! Errors only arise while bringing the board up.  Once the control loop is
//! running, pin faults are logged and absorbed by the drivers so the loop
//! never terminates.

use core::fmt;

use crate::drivers::hw_init::HwInitError;
use crate::sensors::SwitchId;

/// Every fallible startup operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// The startup self-test could not read these inputs (bitmask over
    /// [`SwitchId::mask`]).
    InputsUnreadable(u8),
    /// Timing configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::InputsUnreadable(mask) => {
                write!(f, "unreadable inputs:")?;
                for id in SwitchId::from_mask(*mask) {
                    write!(f, " [{id}]")?;
                }
                Ok(())
            }
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
