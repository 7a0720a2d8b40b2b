//! One-shot hardware peripheral initialization.
//!
//! Configures the five switch inputs (pull-up) and the three indicator
//! outputs (push-pull, driven low) using raw ESP-IDF sys calls, then hands
//! back a [`Board`] that owns typed handles to all eight lines.  Called once
//! from `main()` before the control loop starts.
//!
//! On host targets the same API runs against an in-memory level table so
//! the full control loop can be exercised without hardware.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU64, Ordering};

use log::info;

use crate::drivers::gpio::{GpioInput, GpioOutput};
use crate::drivers::indicators::Indicators;
use crate::pins;
use crate::sensors::switches::SwitchBank;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    DriveCapFailed(i32),
    TimerFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::DriveCapFailed(rc) => write!(f, "GPIO drive capability failed (rc={})", rc),
            Self::TimerFailed(rc) => write!(f, "esp_timer setup failed (rc={})", rc),
        }
    }
}

// ── Board ─────────────────────────────────────────────────────

/// The configured lines, ready to hand to the control loop.
pub struct Board {
    pub switches: SwitchBank<GpioInput>,
    pub indicators: Indicators<GpioOutput>,
}

impl Board {
    fn from_pins() -> Self {
        Self {
            switches: SwitchBank::new(
                GpioInput::new(pins::IGNITION_GPIO),
                GpioInput::new(pins::DRIVER_OCCUPANCY_GPIO),
                GpioInput::new(pins::DRIVER_SEATBELT_GPIO),
                GpioInput::new(pins::PASSENGER_OCCUPANCY_GPIO),
                GpioInput::new(pins::PASSENGER_SEATBELT_GPIO),
            ),
            indicators: Indicators::new(
                GpioOutput::new(pins::DRIVER_WARNING_LED_GPIO),
                GpioOutput::new(pins::PASSENGER_WARNING_LED_GPIO),
                GpioOutput::new(pins::BUZZER_GPIO),
            ),
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<Board, HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_gpio_inputs()?;
        init_gpio_outputs()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(Board::from_pins())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<Board, HwInitError> {
    // Pull-ups hold every input high; outputs boot low.
    for &pin in &pins::INPUT_GPIOS {
        sim_set_level(pin, true);
    }
    for &pin in &pins::OUTPUT_GPIOS {
        sim_set_level(pin, false);
    }
    info!("hw_init(sim): 5 inputs pulled up, 3 outputs low");
    Ok(Board::from_pins())
}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn pin_mask(gpios: &[i32]) -> u64 {
    gpios.iter().fold(0u64, |mask, &pin| mask | (1u64 << pin))
}

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: pin_mask(&pins::INPUT_GPIOS),
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }

    info!("hw_init: switch inputs configured (pull-up) {:?}", pins::INPUT_GPIOS);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> bool {
    sim_level(pin)
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: pin_mask(&pins::OUTPUT_GPIOS),
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }

    for &pin in &pins::OUTPUT_GPIOS {
        // Weakest drive: LEDs and buzzer transistor only need a few mA.
        let ret = unsafe { gpio_set_drive_capability(pin, gpio_drive_cap_t_GPIO_DRIVE_CAP_0) };
        if ret != ESP_OK as i32 { return Err(HwInitError::DriveCapFailed(ret)); }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: indicator outputs configured (push-pull, low) {:?}", pins::OUTPUT_GPIOS);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe { gpio_set_level(pin, u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) {
    sim_set_level(pin, high);
}

// ── Host simulation ───────────────────────────────────────────

/// One bit per GPIO number; set = high.
#[cfg(not(target_os = "espidf"))]
static SIM_LEVELS: AtomicU64 = AtomicU64::new(0);

/// Force a simulated line to a level (e.g. to close a switch).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_level(pin: i32, high: bool) {
    let bit = 1u64 << pin;
    if high {
        SIM_LEVELS.fetch_or(bit, Ordering::Relaxed);
    } else {
        SIM_LEVELS.fetch_and(!bit, Ordering::Relaxed);
    }
}

/// Current level of a simulated line.
#[cfg(not(target_os = "espidf"))]
pub fn sim_level(pin: i32) -> bool {
    SIM_LEVELS.load(Ordering::Relaxed) & (1u64 << pin) != 0
}

/// Serialises unit tests that touch the shared simulated level table.
#[cfg(all(test, not(target_os = "espidf")))]
pub(crate) static SIM_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
