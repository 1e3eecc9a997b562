//! `pit-sim` — forward race simulator for the pit-strategy digital twin.
//!
//! # Tick loop
//!
//! ```text
//! until target.lap == total_laps:
//!   for driver in 0..entry_count:
//!     ① Decide  — PitPolicy::should_pit(entry, state)
//!     ② Apply   — pit: +pit cost, wear = 0, no progress
//!                 drive: speed from wear, +wear, +distance, sector/lap rollover,
//!                        +1 driving tick (0.02 s)
//!   observer.on_tick_end(states)
//! ```
//!
//! The result of a run is the target driver's accumulated time.  All other
//! drivers' state is dropped with the run.
//!
//! # Isolation
//!
//! Each run constructs its own [`RaceRun`], which owns a fresh per-driver
//! state vector.  The [`Scenario`][pit_scenario::Scenario] is only ever
//! borrowed immutably, so concurrent runs need no synchronisation.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pit_core::DriverId;
//! use pit_sim::RaceSimulator;
//!
//! let sim = RaceSimulator::new(&scenario);
//! let secs = sim.simulate_race(DriverId(0), 2)?;
//! ```

pub mod error;
pub mod observer;
pub mod run;
pub mod simulator;


pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RaceObserver};
pub use run::{RaceOutcome, RaceRun};
pub use simulator::RaceSimulator;
