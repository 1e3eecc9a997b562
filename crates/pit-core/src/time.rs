//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Every tick represents
//! [`TICK_SECONDS`] of race time:
//!
//!   race_secs = tick * TICK_SECONDS
//!
//! Counting driving time in whole ticks keeps the result independent of the
//! order in which per-tick increments are summed: two runs that spend the same
//! number of ticks on track report bit-identical times, whichever lap the
//! pit stop falls on.

use std::fmt;

/// Seconds of race time represented by one tick (20 ms).
pub const TICK_SECONDS: f64 = 0.02;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at 50 ticks per simulated second a u64 outlasts any race.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// Race seconds spanned by `self` ticks.
    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0 as f64 * TICK_SECONDS
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RaceClock ─────────────────────────────────────────────────────────────────

/// Whole-field tick counter for one simulated race.
///
/// Each run owns its own clock; it starts at [`Tick::ZERO`] and is advanced
/// once per field-wide tick.
#[derive(Clone, Debug, Default)]
pub struct RaceClock {
    pub current_tick: Tick,
}

impl RaceClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Ticks executed since the start of the race.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.current_tick.0
    }

    /// Race seconds elapsed on the clock.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.as_secs()
    }

    /// Break elapsed time into (minutes, seconds) for human-readable logs.
    pub fn elapsed_ms(&self) -> (u64, f64) {
        let secs = self.elapsed_secs();
        let minutes = (secs / 60.0).floor();
        (minutes as u64, secs - minutes * 60.0)
    }
}

impl fmt::Display for RaceClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms();
        write!(f, "{} ({}:{:06.3})", self.current_tick, m, s)
    }
}
