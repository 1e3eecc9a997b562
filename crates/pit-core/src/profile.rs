//! Immutable track, driver, and car profiles.
//!
//! Profiles are plain data: they are built once by the caller, validated by
//! the scenario builder, and only ever read during simulation.  Every
//! normalized scalar lives in `[0, 1]`.

use crate::{CoreError, CoreResult, DriverId, TrackId};

// ── TrackProfile ──────────────────────────────────────────────────────────────

/// Circuit description shared by every driver in a race.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackProfile {
    pub track_id: TrackId,

    /// Number of timing sectors per lap.  Must be at least 1.
    pub sectors: u32,

    /// Length of one lap in kilometres.  Must be positive.
    pub lap_length_km: f64,

    /// Multiplier on per-tick tire wear.  Abrasive circuits run high values.
    pub tire_wear_factor: f64,

    /// Carried for the live race model; the strategy engine ignores it.
    pub overtaking_difficulty: f64,

    /// Carried for the live race model; the strategy engine ignores it.
    pub safety_car_probability: f64,
}

impl TrackProfile {
    /// Length of one timing sector in kilometres.
    #[inline]
    pub fn sector_length_km(&self) -> f64 {
        self.lap_length_km / self.sectors as f64
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.sectors == 0 {
            return Err(CoreError::NoSectors);
        }
        if !(self.lap_length_km.is_finite() && self.lap_length_km > 0.0) {
            return Err(CoreError::NonPositiveLapLength(self.lap_length_km));
        }
        if !(self.tire_wear_factor.is_finite() && self.tire_wear_factor >= 0.0) {
            return Err(CoreError::InvalidWearFactor(self.tire_wear_factor));
        }
        unit("overtaking_difficulty", self.overtaking_difficulty)?;
        unit("safety_car_probability", self.safety_car_probability)
    }
}

// ── DriverProfile ─────────────────────────────────────────────────────────────

/// Fixed driving-style parameters.  Never mutated during a race.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverProfile {
    pub name: String,
    /// Scales tire wear per tick.
    pub aggression: f64,
    /// Raises the driver's skill multiplier on speed.
    pub consistency: f64,
    /// Raises the wear level the driver tolerates before pitting.
    pub tire_management: f64,
    /// Shifts the pit threshold up (risk-seeking) or down (cautious) around 0.5.
    pub risk_tolerance: f64,
}

impl DriverProfile {
    pub fn validate(&self) -> CoreResult<()> {
        unit("aggression", self.aggression)?;
        unit("consistency", self.consistency)?;
        unit("tire_management", self.tire_management)?;
        unit("risk_tolerance", self.risk_tolerance)
    }
}

// ── CarProfile ────────────────────────────────────────────────────────────────

/// Fixed car performance parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarProfile {
    pub name: String,
    /// Scales top speed.  Must be non-zero for the car to make progress.
    pub engine_power: f64,
    pub aero_efficiency: f64,
    pub cooling_efficiency: f64,
    /// Lowers the stationary cost of a pit stop.
    pub reliability: f64,
}

impl CarProfile {
    pub fn validate(&self) -> CoreResult<()> {
        unit("engine_power", self.engine_power)?;
        unit("aero_efficiency", self.aero_efficiency)?;
        unit("cooling_efficiency", self.cooling_efficiency)?;
        unit("reliability", self.reliability)?;
        if self.engine_power == 0.0 {
            return Err(CoreError::NoEnginePower { car: self.name.clone() });
        }
        Ok(())
    }
}

// ── Entry ─────────────────────────────────────────────────────────────────────

/// One driver and the car they drive, keyed by a stable [`DriverId`].
///
/// Pairing the two profiles in a single record removes any dependency on
/// two separate lists staying index-aligned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub id:     DriverId,
    pub driver: DriverProfile,
    pub car:    CarProfile,
}

impl Entry {
    pub fn validate(&self) -> CoreResult<()> {
        self.driver.validate()?;
        self.car.validate()
    }
}

fn unit(what: &'static str, value: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::OutOfUnitRange { what, value })
    }
}
