//! `RaceSimulator` — the what-if entry point over a shared scenario.

use pit_core::DriverId;
use pit_model::{PitPolicy, TargetStrategy};
use pit_scenario::Scenario;

use crate::{NoopObserver, RaceObserver, RaceOutcome, RaceRun, SimResult};

/// Runs isolated full-race simulations against one [`Scenario`].
///
/// `RaceSimulator` holds nothing but a shared borrow of the scenario, so it is
/// `Copy` and can be handed to any number of worker threads.  Every call
/// builds its own [`RaceRun`]; calls never observe each other.
#[derive(Clone, Copy)]
pub struct RaceSimulator<'a> {
    scenario: &'a Scenario,
}

impl<'a> RaceSimulator<'a> {
    pub fn new(scenario: &'a Scenario) -> Self {
        Self { scenario }
    }

    #[inline]
    pub fn scenario(&self) -> &'a Scenario {
        self.scenario
    }

    /// Total race time of `target` when it stops on `pit_lap` and the rest of
    /// the field follows its wear-threshold policy.
    ///
    /// A `pit_lap` at or beyond the race distance is a legal no-stop strategy.
    /// A zero-lap race returns `0.0` without executing a tick.
    ///
    /// # Errors
    ///
    /// [`SimError::UnknownDriver`][crate::SimError::UnknownDriver] if `target`
    /// is not in the scenario.
    pub fn simulate_race(&self, target: DriverId, pit_lap: u32) -> SimResult<f64> {
        self.simulate_race_observed(target, pit_lap, &mut NoopObserver)
            .map(|outcome| outcome.total_time_secs)
    }

    /// Like [`simulate_race`][Self::simulate_race], reporting every tick to
    /// `observer` and returning the full [`RaceOutcome`].
    pub fn simulate_race_observed<O: RaceObserver>(
        &self,
        target:   DriverId,
        pit_lap:  u32,
        observer: &mut O,
    ) -> SimResult<RaceOutcome> {
        self.run_with_policy(target, TargetStrategy::new(target, pit_lap), observer)
    }

    /// Total race time of `target` when it never stops.
    pub fn no_stop_time(&self, target: DriverId) -> SimResult<f64> {
        self.simulate_race(target, self.scenario.total_laps())
    }

    /// Run one race under an arbitrary pit policy, ending when `target`
    /// finishes.
    pub fn run_with_policy<P: PitPolicy, O: RaceObserver>(
        &self,
        target:   DriverId,
        policy:   P,
        observer: &mut O,
    ) -> SimResult<RaceOutcome> {
        let run = RaceRun::new(self.scenario, target, policy)?;
        Ok(run.run_to_finish(observer))
    }
}
