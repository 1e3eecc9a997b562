//! The validated, read-only race setup.

use pit_core::{CarProfile, DriverId, DriverProfile, Entry, TrackProfile};

use crate::{ScenarioBuilder, ScenarioError, ScenarioResult};

/// Track, entry list, and race distance for a set of simulations.
///
/// Construct through [`ScenarioBuilder`] or [`Scenario::from_index_aligned`];
/// both validate every profile.  Entries are stored densely so that
/// `entries()[id.index()].id == id` for every entry.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scenario {
    pub(crate) track:      TrackProfile,
    pub(crate) entries:    Vec<Entry>,
    pub(crate) total_laps: u32,
}

impl Scenario {
    /// Build a scenario from separate driver and car lists where driver `i`
    /// drives car `i`.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::EntryCountMismatch`] if the lists differ in length,
    /// plus anything [`ScenarioBuilder::build`] rejects.
    pub fn from_index_aligned(
        track:      TrackProfile,
        drivers:    Vec<DriverProfile>,
        cars:       Vec<CarProfile>,
        total_laps: u32,
    ) -> ScenarioResult<Self> {
        if drivers.len() != cars.len() {
            return Err(ScenarioError::EntryCountMismatch {
                drivers: drivers.len(),
                cars:    cars.len(),
            });
        }
        ScenarioBuilder::new(track, total_laps)
            .entries(drivers.into_iter().zip(cars))
            .build()
    }

    #[inline]
    pub fn track(&self) -> &TrackProfile {
        &self.track
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of laps the target driver must complete to finish the race.
    #[inline]
    pub fn total_laps(&self) -> u32 {
        self.total_laps
    }

    /// Look up one entry.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::UnknownDriver`] if `driver` is not in the field.
    pub fn entry(&self, driver: DriverId) -> ScenarioResult<&Entry> {
        self.entries.get(driver.index()).ok_or(ScenarioError::UnknownDriver {
            driver,
            count: self.entries.len(),
        })
    }

    /// Find a driver by display name.
    pub fn find_driver(&self, name: &str) -> Option<DriverId> {
        self.entries.iter().find(|e| e.driver.name == name).map(|e| e.id)
    }

    /// Every driver id in the field, in entry order.
    pub fn driver_ids(&self) -> impl ExactSizeIterator<Item = DriverId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Same scenario over a different race distance.
    pub fn with_total_laps(&self, total_laps: u32) -> Self {
        Self { total_laps, ..self.clone() }
    }
}
