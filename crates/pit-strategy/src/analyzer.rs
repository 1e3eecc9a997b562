//! `StrategyAnalyzer` — exhaustive single-stop pit-lap search.

use std::ops::RangeInclusive;

use pit_core::DriverId;
use pit_scenario::Scenario;
use pit_sim::{RaceSimulator, SimError};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::result::{select_best, CandidateEvaluation, StrategyResult};
use crate::{SearchError, SearchResult};

/// Tuning knobs for the search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Worker thread count for the `parallel` feature.  `None` uses Rayon's
    /// global pool.  Ignored by sequential builds.
    pub num_threads: Option<usize>,
}

/// Finds the pit lap that minimises each driver's race time.
///
/// Every candidate lap is evaluated by a full, isolated forward simulation,
/// so candidates (and drivers) are independent and the search result does not
/// depend on evaluation order or thread count.
pub struct StrategyAnalyzer<'a> {
    simulator: RaceSimulator<'a>,

    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl<'a> StrategyAnalyzer<'a> {
    pub fn new(scenario: &'a Scenario) -> Self {
        Self {
            simulator: RaceSimulator::new(scenario),
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Build an analyzer with an explicit [`SearchConfig`].
    ///
    /// # Errors
    ///
    /// [`SearchError::ThreadPool`] if a dedicated pool was requested and
    /// could not be started.
    pub fn with_config(scenario: &'a Scenario, config: &SearchConfig) -> SearchResult<Self> {
        #[cfg(feature = "parallel")]
        {
            let pool = match config.num_threads {
                Some(n) => Some(
                    rayon::ThreadPoolBuilder::new()
                        .num_threads(n)
                        .build()
                        .map_err(|e| SearchError::ThreadPool(e.to_string()))?,
                ),
                None => None,
            };
            Ok(Self { simulator: RaceSimulator::new(scenario), pool })
        }
        #[cfg(not(feature = "parallel"))]
        {
            let _ = config;
            Ok(Self::new(scenario))
        }
    }

    #[inline]
    pub fn simulator(&self) -> RaceSimulator<'a> {
        self.simulator
    }

    /// Pit laps worth trying: `1..=total_laps - 1`.
    ///
    /// Lap 0 is excluded because nobody pits off the grid.  The final lap is
    /// excluded because the race ends the moment it is reached.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoCandidateLaps`] for races shorter than two laps.
    pub fn candidate_laps(&self) -> SearchResult<RangeInclusive<u32>> {
        let total_laps = self.simulator.scenario().total_laps();
        if total_laps < 2 {
            return Err(SearchError::NoCandidateLaps { total_laps });
        }
        Ok(1..=total_laps - 1)
    }

    /// Race time of `driver` for every candidate pit lap, in lap order.
    pub fn evaluate_candidates(&self, driver: DriverId) -> SearchResult<Vec<CandidateEvaluation>> {
        self.check_driver(driver)?;
        let laps = self.candidate_laps()?;
        debug!(driver = %driver, first = laps.start(), last = laps.end(), "evaluating pit laps");
        self.install(|| self.evaluate_laps(driver, laps))
    }

    /// The fastest single-stop strategy for `driver`.
    ///
    /// Ties are broken toward the earliest pit lap.
    pub fn find_optimal_for_driver(&self, driver: DriverId) -> SearchResult<StrategyResult> {
        let evaluations = self.evaluate_candidates(driver)?;
        let best = select_best(&evaluations).ok_or(SearchError::NoCandidateLaps {
            total_laps: self.simulator.scenario().total_laps(),
        })?;

        let result = StrategyResult {
            driver,
            pit_lap:         best.pit_lap,
            total_time_secs: best.total_time_secs,
        };
        info!(
            driver = %driver,
            name = %self.driver_name(driver),
            pit_lap = result.pit_lap,
            total_time_secs = result.total_time_secs,
            "optimal pit lap"
        );
        Ok(result)
    }

    /// Run [`find_optimal_for_driver`][Self::find_optimal_for_driver] for each
    /// requested driver.  Results follow the request order.
    ///
    /// Every id is checked before any simulation starts, so an invalid
    /// request returns an error without doing partial work.
    pub fn analyze_strategies(&self, drivers: &[DriverId]) -> SearchResult<Vec<StrategyResult>> {
        for &driver in drivers {
            self.check_driver(driver)?;
        }
        if !drivers.is_empty() {
            self.candidate_laps()?;
        }
        debug!(drivers = drivers.len(), "analysing strategies");

        #[cfg(feature = "parallel")]
        {
            self.install(|| {
                drivers
                    .par_iter()
                    .map(|&driver| self.find_optimal_for_driver(driver))
                    .collect()
            })
        }
        #[cfg(not(feature = "parallel"))]
        {
            drivers.iter().map(|&driver| self.find_optimal_for_driver(driver)).collect()
        }
    }

    /// Race time of `driver` without any stop, the baseline a pit strategy
    /// has to beat.
    pub fn no_stop_time(&self, driver: DriverId) -> SearchResult<f64> {
        Ok(self.simulator.no_stop_time(driver)?)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_driver(&self, driver: DriverId) -> SearchResult<()> {
        let count = self.simulator.scenario().entry_count();
        if driver.index() >= count {
            return Err(SimError::UnknownDriver { driver, count }.into());
        }
        Ok(())
    }

    fn driver_name(&self, driver: DriverId) -> &str {
        self.simulator
            .scenario()
            .entry(driver)
            .map(|entry| entry.driver.name.as_str())
            .unwrap_or("?")
    }

    fn evaluate(&self, driver: DriverId, pit_lap: u32) -> SearchResult<CandidateEvaluation> {
        let total_time_secs = self.simulator.simulate_race(driver, pit_lap)?;
        Ok(CandidateEvaluation { pit_lap, total_time_secs })
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_laps(
        &self,
        driver: DriverId,
        laps:   RangeInclusive<u32>,
    ) -> SearchResult<Vec<CandidateEvaluation>> {
        laps.map(|lap| self.evaluate(driver, lap)).collect()
    }

    /// Indexed collect keeps the output in lap order.
    #[cfg(feature = "parallel")]
    fn evaluate_laps(
        &self,
        driver: DriverId,
        laps:   RangeInclusive<u32>,
    ) -> SearchResult<Vec<CandidateEvaluation>> {
        laps.into_par_iter().map(|lap| self.evaluate(driver, lap)).collect()
    }

    #[cfg(feature = "parallel")]
    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    #[cfg(not(feature = "parallel"))]
    #[inline]
    fn install<R>(&self, op: impl FnOnce() -> R) -> R {
        op()
    }
}
