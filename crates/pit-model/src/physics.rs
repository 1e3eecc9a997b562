//! Vehicle and tire formulas.
//!
//! All functions are pure and take validated profiles, so none of them can
//! fail.

use pit_core::{CarProfile, DriverProfile, Entry, TrackProfile};

/// Speed of a perfect driver in a full-power car on new tires.
pub const BASE_SPEED_KPH: f64 = 220.0;

/// Fraction of speed lost on fully worn tires.
pub const WEAR_SPEED_LOSS: f64 = 0.4;

pub const SKILL_BASE: f64 = 0.80;
pub const SKILL_PER_CONSISTENCY: f64 = 0.25;

/// Wear added per tick before track and driver scaling.
pub const WEAR_PER_TICK: f64 = 0.0005;

/// Kilometres covered per tick per unit of speed.
pub const KM_PER_SPEED_TICK: f64 = 0.005;

pub const PIT_BASE_SECS: f64 = 2.0;
/// Extra stationary time for a completely unreliable car.
pub const PIT_UNRELIABILITY_SECS: f64 = 1.0;

pub const PIT_THRESHOLD_BASE: f64 = 0.65;
pub const PIT_THRESHOLD_PER_TIRE_MANAGEMENT: f64 = 0.25;
/// Risk tolerance at which the pit threshold is neither raised nor lowered.
pub const RISK_PIVOT: f64 = 0.5;
pub const PIT_THRESHOLD_PER_RISK: f64 = 0.15;

/// Driver skill multiplier on speed, in `[0.80, 1.05]`.
#[inline]
pub fn driver_skill(driver: &DriverProfile) -> f64 {
    SKILL_BASE + driver.consistency * SKILL_PER_CONSISTENCY
}

/// Instantaneous speed for `entry` on tires worn to `tire_wear`.
#[inline]
pub fn speed_kph(entry: &Entry, tire_wear: f64) -> f64 {
    BASE_SPEED_KPH
        * entry.car.engine_power
        * driver_skill(&entry.driver)
        * (1.0 - tire_wear * WEAR_SPEED_LOSS)
}

/// Tire wear accumulated in one driving tick.
#[inline]
pub fn wear_per_tick(track: &TrackProfile, driver: &DriverProfile) -> f64 {
    WEAR_PER_TICK * track.tire_wear_factor * driver.aggression
}

/// Distance covered in one tick at `speed_kph`.
#[inline]
pub fn distance_per_tick_km(speed_kph: f64) -> f64 {
    speed_kph * KM_PER_SPEED_TICK
}

/// Stationary time charged for one pit stop.
#[inline]
pub fn pit_stop_secs(car: &CarProfile) -> f64 {
    PIT_BASE_SECS + (1.0 - car.reliability) * PIT_UNRELIABILITY_SECS
}

/// Wear level above which a field driver stops for new tires.
///
/// Good tire managers run their tires longer; risk-seeking drivers push past
/// the neutral threshold, cautious ones stop earlier.
#[inline]
pub fn pit_threshold(driver: &DriverProfile) -> f64 {
    let base = PIT_THRESHOLD_BASE + driver.tire_management * PIT_THRESHOLD_PER_TIRE_MANAGEMENT;
    let risk_adjustment = (driver.risk_tolerance - RISK_PIVOT) * PIT_THRESHOLD_PER_RISK;
    base + risk_adjustment
}
