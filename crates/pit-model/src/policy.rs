//! Pit-stop decision policies.

use pit_core::{DriverId, Entry};

use crate::{DriverSimState, physics};

/// Decides, once per driver per tick, whether the driver stops this tick.
///
/// Policies only read; the simulator applies the decision.  Implementations
/// must be `Send + Sync` because one policy value is shared by every driver
/// in a run and runs may execute on worker threads.
pub trait PitPolicy: Send + Sync {
    fn should_pit(&self, entry: &Entry, state: &DriverSimState) -> bool;
}

/// Stop exactly once, on the first tick of lap `lap`.
///
/// A lap the driver never reaches (`lap >= total_laps`) means no stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedLap {
    pub lap: u32,
}

impl PitPolicy for ForcedLap {
    #[inline]
    fn should_pit(&self, _entry: &Entry, state: &DriverSimState) -> bool {
        state.lap == self.lap && !state.has_pitted
    }
}

/// Stop once, as soon as tire wear exceeds the driver's
/// [`pit_threshold`][physics::pit_threshold].
///
/// Baseline behavior for the rest of the field.  It is not optimized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WearThreshold;

impl PitPolicy for WearThreshold {
    #[inline]
    fn should_pit(&self, entry: &Entry, state: &DriverSimState) -> bool {
        state.tire_wear > physics::pit_threshold(&entry.driver) && !state.has_pitted
    }
}

/// A strategy experiment: `target` stops on `pit_lap`, everyone else follows
/// [`WearThreshold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetStrategy {
    pub target:  DriverId,
    pub pit_lap: u32,
}

impl TargetStrategy {
    pub fn new(target: DriverId, pit_lap: u32) -> Self {
        Self { target, pit_lap }
    }
}

impl PitPolicy for TargetStrategy {
    #[inline]
    fn should_pit(&self, entry: &Entry, state: &DriverSimState) -> bool {
        if entry.id == self.target {
            ForcedLap { lap: self.pit_lap }.should_pit(entry, state)
        } else {
            WearThreshold.should_pit(entry, state)
        }
    }
}
