//! `RaceRun` — the state arena and tick loop for one simulated race.

use pit_core::{DriverId, RaceClock, Tick};
use pit_model::{DriverSimState, PitPolicy, TickOutcome};
use pit_scenario::Scenario;
use tracing::trace;

use crate::{RaceObserver, SimError, SimResult};

/// Result of running one race to the target driver's finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceOutcome {
    pub target: DriverId,

    /// The target driver's accumulated race time in seconds.
    pub total_time_secs: f64,

    /// Whole-field ticks executed before the target finished.
    pub ticks: u64,
}

/// One isolated race.
///
/// A `RaceRun` owns a freshly constructed [`DriverSimState`] for every entry
/// and borrows the [`Scenario`] read-only.  Nothing in it outlives the run:
/// a new race always means a new `RaceRun`, so no state can carry over from
/// one experiment to the next.
///
/// Create via [`RaceSimulator`][crate::RaceSimulator] or [`RaceRun::new`].
pub struct RaceRun<'a, P: PitPolicy> {
    scenario: &'a Scenario,
    policy:   P,
    target:   DriverId,
    clock:    RaceClock,

    /// Per-driver race state, indexed by `DriverId`.
    states: Vec<DriverSimState>,
}

impl<'a, P: PitPolicy> RaceRun<'a, P> {
    /// Put every entry on the grid.  The race ends when `target` finishes.
    ///
    /// # Errors
    ///
    /// [`SimError::UnknownDriver`] if `target` is not in the scenario.
    pub fn new(scenario: &'a Scenario, target: DriverId, policy: P) -> SimResult<Self> {
        let count = scenario.entry_count();
        if target.index() >= count {
            return Err(SimError::UnknownDriver { driver: target, count });
        }
        Ok(Self {
            scenario,
            policy,
            target,
            clock:  RaceClock::new(),
            states: vec![DriverSimState::on_grid(); count],
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// `true` once the target driver has completed the race distance.
    ///
    /// Already true on the grid for a zero-lap race.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.target_state().has_finished(self.scenario.total_laps())
    }

    /// Run whole-field ticks until the target driver finishes.
    ///
    /// Always terminates: every validated car has positive speed, so the
    /// target gains distance on every tick except its single pit tick.
    pub fn run_to_finish<O: RaceObserver>(mut self, observer: &mut O) -> RaceOutcome {
        while !self.is_finished() {
            self.step(observer);
        }

        let outcome = RaceOutcome {
            target:          self.target,
            total_time_secs: self.target_state().total_time_secs(),
            ticks:           self.clock.ticks(),
        };
        observer.on_race_end(outcome.ticks, outcome.target, outcome.total_time_secs);
        trace!(
            driver = %outcome.target,
            ticks = outcome.ticks,
            total_time_secs = outcome.total_time_secs,
            "race finished"
        );
        outcome
    }

    /// Advance every driver by exactly one tick.
    ///
    /// Drivers are updated in ascending `DriverId` order.  Each pit decision
    /// reads only that driver's own state, so the order does not affect the
    /// result.
    pub fn step<O: RaceObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let track = self.scenario.track();
        for (entry, state) in self.scenario.entries().iter().zip(self.states.iter_mut()) {
            let pit_now = self.policy.should_pit(entry, state);

            match state.apply_tick(track, entry, pit_now) {
                TickOutcome::Pitted { cost_secs } => {
                    trace!(driver = %entry.id, lap = state.lap, tick = now.0, cost_secs, "pit stop");
                    observer.on_pit(now, entry.id, cost_secs);
                }
                TickOutcome::Drove { lap_completed: true, .. } => {
                    observer.on_lap_complete(now, entry.id, state.lap);
                }
                TickOutcome::Drove { .. } => {}
            }
        }

        observer.on_tick_end(now, &self.states);
        self.clock.advance();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn target(&self) -> DriverId {
        self.target
    }

    #[inline]
    pub fn target_state(&self) -> &DriverSimState {
        &self.states[self.target.index()]
    }

    /// Every driver's state, indexed by `DriverId`.
    #[inline]
    pub fn states(&self) -> &[DriverSimState] {
        &self.states
    }

    /// The next tick to be executed.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn clock(&self) -> &RaceClock {
        &self.clock
    }

    /// Running order, leader first, by laps, sectors, and distance covered.
    ///
    /// Ties keep `DriverId` order.
    pub fn standings(&self) -> Vec<DriverId> {
        let mut order: Vec<DriverId> = self.scenario.driver_ids().collect();
        order.sort_by(|a, b| self.states[a.index()].cmp_progress(&self.states[b.index()]));
        order
    }
}
