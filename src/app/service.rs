//! Application service: the seatbelt warning controller.
//!
//! Each control tick runs one fixed pipeline:
//!
//! ```text
//!  SwitchPort::sample ─▶ warning::evaluate ─▶ BlinkSource::poll
//!                                                   │
//!        IndicatorPort::apply ◀─ OutputCommand::assemble
//! ```
//!
//! [`run`] wraps that in the never-returning poll loop: tick, then block
//! for the poll interval.  The delay is a plain sleep, not a scheduler, so
//! the real period is the poll interval plus the tick's own work.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::events::{AppEvent, TickReport};
use crate::app::outputs::OutputCommand;
use crate::app::ports::{EventSink, IndicatorPort, MonotonicClock, SwitchPort};
use crate::app::warning::{self, Seat, WarningFlags};
use crate::config::TimingConfig;
use crate::fsm::{BlinkSource, BlinkTimer};

pub struct WarningService<B> {
    timing: TimingConfig,
    blink: B,
    /// Flags from the previous tick.  Only used to log raise/clear edges.
    last_flags: WarningFlags,
    ticks: u64,
}

impl WarningService<BlinkTimer> {
    /// Service with a polled blink oscillator.
    pub fn new(timing: TimingConfig) -> Self {
        Self::with_blink_source(timing, BlinkTimer::new(timing.blink_half_period_ms))
    }
}

impl<B: BlinkSource> WarningService<B> {
    pub fn with_blink_source(timing: TimingConfig, blink: B) -> Self {
        Self {
            timing,
            blink,
            last_flags: WarningFlags::default(),
            ticks: 0,
        }
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.timing));
    }

    /// Run one control-loop iteration and return what it did.
    pub fn tick<S, I, C, E>(
        &mut self,
        switches: &mut S,
        indicators: &mut I,
        clock: &C,
        sink: &mut E,
    ) -> TickReport
    where
        S: SwitchPort,
        I: IndicatorPort,
        C: MonotonicClock,
        E: EventSink,
    {
        let readings = switches.sample();
        let flags = warning::evaluate(&readings);

        let now_ms = clock.now_ms();
        let blink = self.blink.poll(now_ms);
        let outputs = OutputCommand::assemble(flags, blink);
        indicators.apply(&outputs);

        for seat in Seat::ALL {
            match (self.last_flags.get(seat), flags.get(seat)) {
                (false, true) => sink.emit(&AppEvent::WarningRaised(seat)),
                (true, false) => sink.emit(&AppEvent::WarningCleared(seat)),
                _ => {}
            }
        }
        self.last_flags = flags;
        self.ticks = self.ticks.wrapping_add(1);

        let report = TickReport {
            now_ms,
            readings,
            flags,
            blink,
            outputs,
        };
        sink.emit(&AppEvent::Tick(report));
        report
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// The control loop.  Never returns.
pub fn run<B, S, I, C, D, E>(
    mut service: WarningService<B>,
    mut switches: S,
    mut indicators: I,
    clock: C,
    mut delay: D,
    mut sink: E,
) -> !
where
    B: BlinkSource,
    S: SwitchPort,
    I: IndicatorPort,
    C: MonotonicClock,
    D: DelayNs,
    E: EventSink,
{
    let poll_ms = service.timing().poll_interval_ms;
    info!("control loop: polling every {poll_ms}ms");
    loop {
        service.tick(&mut switches, &mut indicators, &clock, &mut sink);
        delay.delay_ms(poll_ms);
    }
}
