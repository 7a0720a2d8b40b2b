//! Mock hardware for integration tests.
//!
//! Input pins read from a shared level cell the test can flip; output pins
//! record every write so tests can assert on the full output history
//! without touching real GPIO registers.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use beltguard::app::events::AppEvent;
use beltguard::app::ports::{EventSink, MonotonicClock};
use beltguard::drivers::indicators::Indicators;
use beltguard::sensors::switches::SwitchBank;
use beltguard::sensors::{Level, SwitchId};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

// ── Input pins ────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockInput {
    high: Rc<Cell<bool>>,
}

impl ErrorType for MockInput {
    type Error = Infallible;
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high.get())
    }
}

/// Handles to the five switch lines, all pulled up (open) initially.
pub struct Harness {
    lines: [Rc<Cell<bool>>; 5],
}

#[allow(dead_code)]
impl Harness {
    pub fn new() -> Self {
        Self {
            lines: std::array::from_fn(|_| Rc::new(Cell::new(true))),
        }
    }

    fn index(id: SwitchId) -> usize {
        SwitchId::ALL.iter().position(|&s| s == id).unwrap()
    }

    pub fn set(&self, id: SwitchId, level: Level) {
        self.lines[Self::index(id)].set(level.is_high());
    }

    pub fn switch_bank(&self) -> SwitchBank<MockInput> {
        let [a, b, c, d, e] = self.lines.clone().map(|high| MockInput { high });
        SwitchBank::new(a, b, c, d, e)
    }
}

// ── Output pins ───────────────────────────────────────────────

#[derive(Clone)]
pub struct MockOutput {
    writes: Rc<RefCell<Vec<bool>>>,
}

impl ErrorType for MockOutput {
    type Error = Infallible;
}

impl OutputPin for MockOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.writes.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.writes.borrow_mut().push(true);
        Ok(())
    }
}

/// Write history of the three indicator outputs.
pub struct OutputLog {
    pub driver_led: Rc<RefCell<Vec<bool>>>,
    pub passenger_led: Rc<RefCell<Vec<bool>>>,
    pub buzzer: Rc<RefCell<Vec<bool>>>,
}

#[allow(dead_code)]
impl OutputLog {
    pub fn new() -> Self {
        Self {
            driver_led: Rc::default(),
            passenger_led: Rc::default(),
            buzzer: Rc::default(),
        }
    }

    pub fn indicators(&self) -> Indicators<MockOutput> {
        Indicators::new(
            MockOutput { writes: Rc::clone(&self.driver_led) },
            MockOutput { writes: Rc::clone(&self.passenger_led) },
            MockOutput { writes: Rc::clone(&self.buzzer) },
        )
    }

    pub fn driver_led(&self) -> Vec<bool> {
        self.driver_led.borrow().clone()
    }

    pub fn passenger_led(&self) -> Vec<bool> {
        self.passenger_led.borrow().clone()
    }

    pub fn buzzer(&self) -> Vec<bool> {
        self.buzzer.borrow().clone()
    }
}

// ── Time ──────────────────────────────────────────────────────

/// Simulated millisecond tick, shared between the clock and the delay.
#[derive(Clone, Default)]
pub struct SimClock {
    now: Rc<Cell<u32>>,
}

#[allow(dead_code)]
impl SimClock {
    pub fn at(ms: u32) -> Self {
        Self { now: Rc::new(Cell::new(ms)) }
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay { clock: self.clone() }
    }

    /// Delay that panics once the clock passes `stop_after_ms`, the only
    /// way out of a never-returning loop under test.
    pub fn bounded_delay(&self, stop_after_ms: u32) -> BoundedDelay {
        BoundedDelay {
            clock: self.clone(),
            stop_after_ms,
            sleeps: Rc::default(),
        }
    }
}

impl MonotonicClock for SimClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Delay that advances the simulated clock instead of sleeping.
pub struct SimDelay {
    clock: SimClock,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance(ms);
    }
}

/// [`SimDelay`] with a stop condition and a record of every sleep.
pub struct BoundedDelay {
    clock: SimClock,
    stop_after_ms: u32,
    pub sleeps: Rc<RefCell<Vec<u32>>>,
}

impl DelayNs for BoundedDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleeps.borrow_mut().push(ms);
        self.clock.advance(ms);
        if self.clock.now_ms() > self.stop_after_ms {
            panic!("loop stopped at {}ms", self.clock.now_ms());
        }
    }
}

// ── Event sink ────────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events other than the per-tick trace.
    pub fn edges(&self) -> Vec<&AppEvent> {
        self.events
            .iter()
            .filter(|e| !matches!(e, AppEvent::Tick(_)))
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
