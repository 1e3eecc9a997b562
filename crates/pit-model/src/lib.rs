//! `pit-model` — per-driver race state, vehicle physics, and pit policies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `DriverSimState` — one driver's mutable race state, `TickOutcome` |
//! | [`physics`] | speed, tire-wear, pit-cost, and pit-threshold formulas            |
//! | [`policy`]  | `PitPolicy` trait, `ForcedLap`, `WearThreshold`, `TargetStrategy` |
//!
//! # Tick model (summary)
//!
//! Each tick a driver either **pits** (pays the stationary pit cost, fresh
//! tires, no progress) or **drives**:
//!
//! ```text
//! speed     = 220 * engine_power * (0.80 + consistency * 0.25) * (1 - wear * 0.4)
//! wear     += 0.0005 * tire_wear_factor * aggression          (clamped to 1)
//! distance += speed * 0.005
//! distance ≥ sector length → next sector; past the last sector → next lap
//! ```
//!
//! Whether a driver pits is decided by a [`PitPolicy`] before the state is
//! advanced.  The simulator never lets the policy touch state directly.

pub mod physics;
pub mod policy;
pub mod state;

#[cfg(test)]
mod tests;

pub use policy::{ForcedLap, PitPolicy, TargetStrategy, WearThreshold};
pub use state::{DriverSimState, TickOutcome};
