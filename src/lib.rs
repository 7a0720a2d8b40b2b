//! BeltGuard firmware library.
//!
//! Exposes the warning logic and pin drivers for integration testing.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module; on the host, pins run against a simulated level
//! table.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod pins;
pub mod sensors;
