//! Race observer trait for diagnostics and tests.

use pit_core::{DriverId, Tick};
use pit_model::DriverSimState;

/// Callbacks invoked by [`RaceRun`][crate::RaceRun] at key points in the tick
/// loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers receive shared borrows only;
/// run state can be inspected but never modified from outside the run.
///
/// # Example — pit-stop logger
///
/// ```rust,ignore
/// struct PitLog(Vec<(Tick, DriverId)>);
///
/// impl RaceObserver for PitLog {
///     fn on_pit(&mut self, tick: Tick, driver: DriverId, _cost: f64) {
///         self.0.push((tick, driver));
///     }
/// }
/// ```
pub trait RaceObserver {
    /// Called at the very start of each tick, before any driver is updated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when `driver` stops this tick.
    fn on_pit(&mut self, _tick: Tick, _driver: DriverId, _cost_secs: f64) {}

    /// Called when `driver` crosses the line to complete lap `lap`.
    fn on_lap_complete(&mut self, _tick: Tick, _driver: DriverId, _lap: u32) {}

    /// Called after every driver has been updated for this tick.
    ///
    /// `states` is indexed by `DriverId`.
    fn on_tick_end(&mut self, _tick: Tick, _states: &[DriverSimState]) {}

    /// Called once when the target driver has finished, after `ticks`
    /// whole-field ticks.
    fn on_race_end(&mut self, _ticks: u64, _target: DriverId, _total_time_secs: f64) {}
}

/// A [`RaceObserver`] that does nothing.  Used by the plain
/// [`RaceSimulator::simulate_race`][crate::RaceSimulator::simulate_race].
pub struct NoopObserver;

impl RaceObserver for NoopObserver {}
