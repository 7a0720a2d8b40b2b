//! BeltGuard Firmware: Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  Drivers / Adapters                        │
//! │                                                            │
//! │  SwitchBank      Indicators      SystemClock  LogEventSink │
//! │  (SwitchPort)    (IndicatorPort) (Clock)      (EventSink)  │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ───────────────────  │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │          WarningService (pure logic)                 │  │
//! │  │  evaluate · blink oscillator · output assembly       │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use beltguard::adapters::log_sink::LogEventSink;
use beltguard::adapters::time::{SystemClock, SystemDelay};
use beltguard::app::service::{self, WarningService};
use beltguard::config::TimingConfig;
use beltguard::drivers::hw_init;
use beltguard::error::Error;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  BeltGuard v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let timing = TimingConfig::default();
    if let Err(e) = timing.validate() {
        error!("{}, halting", Error::Config(e));
        halt();
    }

    // ── 2. Pins: 5 pulled-up inputs, 3 push-pull outputs ─────
    let mut board = match hw_init::init_peripherals() {
        Ok(b) => b,
        Err(e) => {
            error!("HAL init failed: {}, halting", e);
            halt();
        }
    };
    board.indicators.all_off();

    // ── 3. Input self-test ────────────────────────────────────
    match board.switches.self_test() {
        Ok(r) => info!("Self-test: switches readable ({:?})", r),
        Err(e) => {
            error!("Self-test failed ({}), check harness wiring; halting", e);
            halt();
        }
    }

    // ── 4. Control loop ───────────────────────────────────────
    let mut sink = LogEventSink::new();
    info!("System ready. Entering control loop.");

    #[cfg(feature = "timer-blink")]
    {
        use beltguard::drivers::hw_timer;
        use beltguard::fsm::shared::TIMER_BLINK;

        if let Err(e) = hw_timer::start_blink_timer(timing.blink_half_period_ms) {
            error!("Blink timer failed: {}, halting", Error::from(e));
            halt();
        }
        let mut app = WarningService::with_blink_source(timing, &TIMER_BLINK);
        app.start(&mut sink);
        service::run(app, board.switches, board.indicators, SystemClock::new(), SystemDelay, sink)
    }

    #[cfg(not(feature = "timer-blink"))]
    {
        let mut app = WarningService::new(timing);
        app.start(&mut sink);
        service::run(app, board.switches, board.indicators, SystemClock::new(), SystemDelay, sink)
    }
}

/// Park the main task forever without touching the outputs.
fn halt() -> ! {
    loop {
        esp_idf_svc::hal::delay::FreeRtos::delay_ms(1_000);
    }
}
