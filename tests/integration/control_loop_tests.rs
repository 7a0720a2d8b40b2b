//! Integration tests for the SwitchBank → WarningService → Indicators
//! pipeline, driven tick by tick on a simulated clock.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use crate::mock_hw::{Harness, OutputLog, RecordingSink, SimClock};

use beltguard::app::events::AppEvent;
use beltguard::app::service::{self, WarningService};
use beltguard::app::warning::Seat;
use beltguard::config::TimingConfig;
use beltguard::fsm::BlinkState;
use beltguard::sensors::{Level, SwitchId};
use embedded_hal::delay::DelayNs;

struct Rig {
    harness: Harness,
    outputs: OutputLog,
    clock: SimClock,
    sink: RecordingSink,
}

impl Rig {
    fn new() -> Self {
        Self {
            harness: Harness::new(),
            outputs: OutputLog::new(),
            clock: SimClock::at(0),
            sink: RecordingSink::new(),
        }
    }

    /// Step the loop body `ticks` times (tick, then sleep for the poll
    /// interval) so inputs can change between steps.
    fn run_ticks(&mut self, app: &mut WarningService<beltguard::fsm::BlinkTimer>, ticks: usize) -> Vec<BlinkState> {
        let mut switches = self.harness.switch_bank();
        let mut indicators = self.outputs.indicators();
        let mut delay = self.clock.delay();
        let poll = app.timing().poll_interval_ms;
        let mut phases = Vec::with_capacity(ticks);
        for _ in 0..ticks {
            let report = app.tick(&mut switches, &mut indicators, &self.clock, &mut self.sink);
            phases.push(report.blink);
            delay.delay_ms(poll);
        }
        phases
    }

    fn seat_unbelted(&self, seat: Seat) {
        self.harness.set(SwitchId::Ignition, Level::Low);
        match seat {
            Seat::Driver => {
                self.harness.set(SwitchId::DriverOccupancy, Level::Low);
                self.harness.set(SwitchId::DriverSeatbelt, Level::High);
            }
            Seat::Passenger => {
                self.harness.set(SwitchId::PassengerOccupancy, Level::Low);
                self.harness.set(SwitchId::PassengerSeatbelt, Level::High);
            }
        }
    }
}

// ── Scenario: empty driver seat ───────────────────────────────

#[test]
fn empty_driver_seat_never_lights_driver_led() {
    let mut rig = Rig::new();
    rig.harness.set(SwitchId::Ignition, Level::Low);
    rig.harness.set(SwitchId::DriverOccupancy, Level::High);
    rig.harness.set(SwitchId::DriverSeatbelt, Level::High);

    let mut app = WarningService::new(TimingConfig::default());
    rig.run_ticks(&mut app, 20);

    assert!(rig.outputs.driver_led().iter().all(|&on| !on));
    assert!(rig.outputs.buzzer().iter().all(|&on| !on));
    assert!(rig.sink.edges().is_empty());
}

// ── Scenario: unbelted driver for 1200ms ──────────────────────

#[test]
fn unbelted_driver_blinks_led_and_holds_buzzer() {
    let mut rig = Rig::new();
    rig.seat_unbelted(Seat::Driver);

    let mut app = WarningService::new(TimingConfig::default());
    // Ticks at t = 0, 100, ..., 1200.
    rig.run_ticks(&mut app, 13);

    let led = rig.outputs.driver_led();
    let expected: Vec<bool> = (0..13u32).map(|i| (5..10).contains(&i)).collect();
    assert_eq!(led, expected, "LED should be on from 500ms to 900ms");

    let rising = led.windows(2).filter(|w| !w[0] && w[1]).count();
    let falling = led.windows(2).filter(|w| w[0] && !w[1]).count();
    assert_eq!((rising, falling), (1, 1));

    assert_eq!(rig.outputs.buzzer(), vec![true; 13], "buzzer must be solid");
    assert!(rig.outputs.passenger_led().iter().all(|&on| !on));
}

#[test]
fn buzzer_stays_solid_across_many_blink_toggles() {
    let mut rig = Rig::new();
    rig.seat_unbelted(Seat::Passenger);

    let mut app = WarningService::new(TimingConfig::default());
    let phases = rig.run_ticks(&mut app, 60);

    let toggles = phases.windows(2).filter(|w| w[0] != w[1]).count();
    assert!(toggles >= 10, "only {toggles} toggles in 6s");
    assert!(rig.outputs.buzzer().iter().all(|&on| on));

    let led = rig.outputs.passenger_led();
    for (on, phase) in led.iter().zip(&phases) {
        assert_eq!(*on, phase.is_on());
    }
}

#[test]
fn control_loop_ticks_then_sleeps_the_poll_interval() {
    let rig = Rig::new();
    rig.seat_unbelted(Seat::Driver);

    let delay = rig.clock.bounded_delay(1200);
    let sleeps = Rc::clone(&delay.sleeps);
    let switches = rig.harness.switch_bank();
    let indicators = rig.outputs.indicators();
    let clock = rig.clock.clone();

    let stopped = catch_unwind(AssertUnwindSafe(move || {
        service::run(
            WarningService::new(TimingConfig::default()),
            switches,
            indicators,
            clock,
            delay,
            RecordingSink::new(),
        );
    }));
    assert!(stopped.is_err(), "control loop returned");

    // Ticks at t = 0, 100, ..., 1200; the sleep after the last one stops it.
    let expected: Vec<bool> = (0..13u32).map(|i| (5..10).contains(&i)).collect();
    assert_eq!(rig.outputs.driver_led(), expected);
    assert_eq!(rig.outputs.buzzer(), vec![true; 13]);
    assert_eq!(*sleeps.borrow(), vec![100; 13]);
}

// ── Seat independence ─────────────────────────────────────────

#[test]
fn leds_only_follow_their_own_seat() {
    let mut rig = Rig::new();
    rig.seat_unbelted(Seat::Driver);
    rig.harness.set(SwitchId::PassengerOccupancy, Level::Low);
    rig.harness.set(SwitchId::PassengerSeatbelt, Level::Low); // buckled

    let mut app = WarningService::new(TimingConfig::default());
    rig.run_ticks(&mut app, 12);

    assert!(rig.outputs.driver_led().iter().any(|&on| on));
    assert!(rig.outputs.passenger_led().iter().all(|&on| !on));
}

#[test]
fn both_seats_blink_in_phase() {
    let mut rig = Rig::new();
    rig.seat_unbelted(Seat::Driver);
    rig.seat_unbelted(Seat::Passenger);

    let mut app = WarningService::new(TimingConfig::default());
    rig.run_ticks(&mut app, 25);

    assert_eq!(rig.outputs.driver_led(), rig.outputs.passenger_led());
}

// ── Blink phase is free-running ───────────────────────────────

#[test]
fn warning_joins_the_running_blink_phase() {
    let mut rig = Rig::new();
    let mut app = WarningService::new(TimingConfig::default());

    // 700ms with no warning: oscillator already flipped on at 500ms.
    let phases = rig.run_ticks(&mut app, 7);
    assert_eq!(phases.last(), Some(&BlinkState::On));

    // Warning appears at 700ms; LED picks up the current phase immediately.
    rig.seat_unbelted(Seat::Driver);
    rig.run_ticks(&mut app, 1);
    assert_eq!(rig.outputs.driver_led().last(), Some(&true));
}

// ── Edges ─────────────────────────────────────────────────────

#[test]
fn buckling_up_clears_warning_and_outputs() {
    let mut rig = Rig::new();
    rig.seat_unbelted(Seat::Driver);
    let mut app = WarningService::new(TimingConfig::default());
    rig.run_ticks(&mut app, 6);

    rig.harness.set(SwitchId::DriverSeatbelt, Level::Low);
    rig.run_ticks(&mut app, 6);

    let buzzer = rig.outputs.buzzer();
    assert!(buzzer[..6].iter().all(|&on| on));
    assert!(buzzer[6..].iter().all(|&on| !on));
    assert!(rig.outputs.driver_led()[6..].iter().all(|&on| !on));

    let edges = rig.sink.edges();
    assert_eq!(edges.len(), 2);
    assert!(matches!(edges[0], AppEvent::WarningRaised(Seat::Driver)));
    assert!(matches!(edges[1], AppEvent::WarningCleared(Seat::Driver)));
}

#[test]
fn ignition_switch_closed_vs_open_gates_warning() {
    let mut rig = Rig::new();
    rig.seat_unbelted(Seat::Driver);
    rig.harness.set(SwitchId::Ignition, Level::High);

    let mut app = WarningService::new(TimingConfig::default());
    rig.run_ticks(&mut app, 10);
    assert!(rig.outputs.buzzer().iter().all(|&on| !on));
}
