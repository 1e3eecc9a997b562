//! Fluent builder for constructing a [`Scenario`].

use pit_core::{CarProfile, DriverId, DriverProfile, Entry, TrackProfile};
use tracing::debug;

use crate::{Scenario, ScenarioError, ScenarioResult};

/// Fluent builder for [`Scenario`].
///
/// Entries receive dense [`DriverId`]s in the order they are added.
///
/// # Example
///
/// ```rust,ignore
/// let scenario = ScenarioBuilder::new(track, 50)
///     .entry(verstappen, red_bull)
///     .entry(hamilton, mercedes)
///     .build()?;
/// assert_eq!(scenario.find_driver("Lewis Hamilton"), Some(DriverId(1)));
/// ```
pub struct ScenarioBuilder {
    track:      TrackProfile,
    total_laps: u32,
    entries:    Vec<(DriverProfile, CarProfile)>,
}

impl ScenarioBuilder {
    pub fn new(track: TrackProfile, total_laps: u32) -> Self {
        Self { track, total_laps, entries: Vec::new() }
    }

    /// Add one driver and the car they drive.
    pub fn entry(mut self, driver: DriverProfile, car: CarProfile) -> Self {
        self.entries.push((driver, car));
        self
    }

    /// Add several entries, e.g. the output of
    /// [`load_entries_reader`][crate::load_entries_reader].
    pub fn entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (DriverProfile, CarProfile)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Validate every profile and return the finished scenario.
    ///
    /// Fails fast: nothing is simulated against an invalid configuration.
    pub fn build(self) -> ScenarioResult<Scenario> {
        self.track.validate()?;
        if self.entries.is_empty() {
            return Err(ScenarioError::NoEntries);
        }

        let count = self.entries.len();
        let entries = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, (driver, car))| {
                let id = DriverId::try_from(i).map_err(|_| ScenarioError::TooManyEntries(count))?;
                let entry = Entry { id, driver, car };
                entry.validate()?;
                Ok(entry)
            })
            .collect::<ScenarioResult<Vec<_>>>()?;

        debug!(
            track = self.track.track_id.0,
            entries = entries.len(),
            total_laps = self.total_laps,
            "scenario built"
        );

        Ok(Scenario {
            track: self.track,
            entries,
            total_laps: self.total_laps,
        })
    }
}
