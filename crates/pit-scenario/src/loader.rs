//! CSV entry-list loader.
//!
//! # CSV format
//!
//! One row per entry.  Row order becomes `DriverId` order once the entries
//! are handed to [`ScenarioBuilder`][crate::ScenarioBuilder].
//!
//! ```csv
//! driver,aggression,consistency,tire_management,risk_tolerance,car,engine_power,aero_efficiency,cooling_efficiency,reliability
//! Max Verstappen,0.85,0.90,0.80,0.90,Red Bull,0.95,0.98,0.88,0.92
//! Lewis Hamilton,0.65,0.95,0.95,0.60,Mercedes,0.90,0.95,0.95,0.98
//! ```
//!
//! Values are only parsed here; range checks happen in
//! [`ScenarioBuilder::build`][crate::ScenarioBuilder::build] so that loaded
//! and hand-built entries go through the same validation.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pit_core::{CarProfile, DriverProfile};

use crate::{ScenarioError, ScenarioResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EntryRecord {
    driver:             String,
    aggression:         f64,
    consistency:        f64,
    tire_management:    f64,
    risk_tolerance:     f64,
    car:                String,
    engine_power:       f64,
    aero_efficiency:    f64,
    cooling_efficiency: f64,
    reliability:        f64,
}

impl EntryRecord {
    fn into_profiles(self) -> (DriverProfile, CarProfile) {
        (
            DriverProfile {
                name:            self.driver,
                aggression:      self.aggression,
                consistency:     self.consistency,
                tire_management: self.tire_management,
                risk_tolerance:  self.risk_tolerance,
            },
            CarProfile {
                name:               self.car,
                engine_power:       self.engine_power,
                aero_efficiency:    self.aero_efficiency,
                cooling_efficiency: self.cooling_efficiency,
                reliability:        self.reliability,
            },
        )
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `(driver, car)` pairs from a CSV file.
pub fn load_entries_csv(path: &Path) -> ScenarioResult<Vec<(DriverProfile, CarProfile)>> {
    let file = std::fs::File::open(path).map_err(ScenarioError::Io)?;
    load_entries_reader(file)
}

/// Like [`load_entries_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for entry lists embedded
/// in a binary.
pub fn load_entries_reader<R: Read>(reader: R) -> ScenarioResult<Vec<(DriverProfile, CarProfile)>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    csv_reader
        .deserialize::<EntryRecord>()
        .map(|row| {
            row.map(EntryRecord::into_profiles)
                .map_err(|e| ScenarioError::Parse(e.to_string()))
        })
        .collect()
}
