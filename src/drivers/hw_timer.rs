//! Periodic blink timer using ESP-IDF's esp_timer API.
//!
//! Only built with the `timer-blink` feature.  A periodic timer advances
//! [`TIMER_BLINK`] once per blink half-period; the control loop then reads
//! the phase instead of polling a [`BlinkTimer`](crate::fsm::BlinkTimer).
//!
//! Timer callbacks execute in the ESP timer task context (not ISR), and
//! only touch the atomic generation counter.  On simulation targets a
//! background thread stands in for the timer.

use crate::drivers::hw_init::HwInitError;
use crate::fsm::shared::TIMER_BLINK;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

#[cfg(target_os = "espidf")]
unsafe extern "C" fn blink_tick_cb(_arg: *mut core::ffi::c_void) {
    TIMER_BLINK.advance();
}

/// Start the blink timer.  The timer runs for the life of the firmware,
/// so its handle is never kept.
#[cfg(target_os = "espidf")]
pub fn start_blink_timer(half_period_ms: u32) -> Result<(), HwInitError> {
    let mut handle: esp_timer_handle_t = core::ptr::null_mut();
    let args = esp_timer_create_args_t {
        callback: Some(blink_tick_cb),
        arg: core::ptr::null_mut(),
        dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
        name: b"blink\0".as_ptr() as *const _,
        skip_unhandled_events: true,
    };
    // SAFETY: called once from main() before the control loop; the callback
    // only performs an atomic increment on a static.
    let ret = unsafe { esp_timer_create(&args, &mut handle) };
    if ret != ESP_OK { return Err(HwInitError::TimerFailed(ret)); }

    let period_us = u64::from(half_period_ms) * 1_000;
    let ret = unsafe { esp_timer_start_periodic(handle, period_us) };
    if ret != ESP_OK { return Err(HwInitError::TimerFailed(ret)); }

    info!("hw_timer: blink timer started ({}ms half-period)", half_period_ms);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_blink_timer(half_period_ms: u32) -> Result<(), HwInitError> {
    let period = std::time::Duration::from_millis(u64::from(half_period_ms));
    std::thread::Builder::new()
        .name("blink".into())
        .spawn(move || {
            loop {
                std::thread::sleep(period);
                TIMER_BLINK.advance();
            }
        })
        .map_err(|_| HwInitError::TimerFailed(-1))?;
    info!("hw_timer(sim): blink thread started ({}ms half-period)", half_period_ms);
    Ok(())
}
