//! Application core: pure domain logic, zero I/O.
//!
//! Warning evaluation, output assembly, and the control-loop service.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real pins.

pub mod events;
pub mod outputs;
pub mod ports;
pub mod service;
pub mod warning;
