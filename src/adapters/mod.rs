//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements            | Connects to          |
//! |------------|-----------------------|----------------------|
//! | `log_sink` | EventSink             | Serial log output    |
//! | `time`     | MonotonicClock        | ESP32 system timer   |
//! |            | embedded-hal DelayNs  | FreeRTOS task delay  |
//!
//! The switch and indicator ports are implemented directly by the pin
//! drivers in [`crate::drivers`].

pub mod log_sink;
pub mod time;
