//! Per-driver race state.

use std::cmp::Ordering;

use pit_core::{Entry, Tick, TrackProfile};

use crate::physics;

/// The mutable race state of a single driver.
///
/// A driver is always in one of two situations on a given tick: **pitting**
/// (`is_on_pit = true`, only for the tick the stop is executed) or
/// **driving**.  `has_pitted` latches once the first stop happens and never
/// clears within a race.
///
/// Race time is split into whole driving ticks and accumulated pit cost; see
/// [`total_time_secs`][Self::total_time_secs].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverSimState {
    /// Completed laps.  The race is over for a driver once this reaches the
    /// scenario's lap count.
    pub lap: u32,

    /// Current sector.  `0` on the grid; `1..=sectors` once on track.
    pub sector: u32,

    /// Tire wear fraction, clamped to `[0, 1]`.
    pub tire_wear: f64,

    /// Distance travelled since the last sector boundary, in km.
    pub distance_in_lap_km: f64,

    /// Ticks spent driving.
    pub driving_ticks: Tick,

    /// Stationary time spent in the pits, in seconds.
    pub pit_time_secs: f64,

    pub has_pitted: bool,
    pub is_on_pit:  bool,
}

/// What happened to one driver during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The driver stopped; `cost_secs` was added to race time.
    Pitted { cost_secs: f64 },

    /// The driver covered ground at `speed_kph`.
    Drove {
        speed_kph:        f64,
        sector_completed: bool,
        lap_completed:    bool,
    },
}

impl Default for DriverSimState {
    fn default() -> Self {
        Self::on_grid()
    }
}

impl DriverSimState {
    /// Fresh state at the start of a race: lap 0, sector 0, new tires, no
    /// time, no stops.
    pub fn on_grid() -> Self {
        Self {
            lap:                0,
            sector:             0,
            tire_wear:          0.0,
            distance_in_lap_km: 0.0,
            driving_ticks:      Tick::ZERO,
            pit_time_secs:      0.0,
            has_pitted:         false,
            is_on_pit:          false,
        }
    }

    /// Accumulated race time in seconds.
    #[inline]
    pub fn total_time_secs(&self) -> f64 {
        self.driving_ticks.as_secs() + self.pit_time_secs
    }

    /// `true` once `total_laps` laps are complete.
    #[inline]
    pub fn has_finished(&self, total_laps: u32) -> bool {
        self.lap >= total_laps
    }

    /// Advance this driver by one tick.
    ///
    /// `pit_now` is the pit decision for this tick, made by the caller's
    /// [`PitPolicy`][crate::PitPolicy] against the state *before* the tick.
    pub fn apply_tick(&mut self, track: &TrackProfile, entry: &Entry, pit_now: bool) -> TickOutcome {
        // The pit lane occupies exactly one tick.
        self.is_on_pit = false;

        if pit_now {
            return self.pit(entry);
        }
        self.drive(track, entry)
    }

    fn pit(&mut self, entry: &Entry) -> TickOutcome {
        let cost_secs = physics::pit_stop_secs(&entry.car);
        self.has_pitted = true;
        self.is_on_pit = true;
        self.pit_time_secs += cost_secs;
        self.tire_wear = 0.0;
        TickOutcome::Pitted { cost_secs }
    }

    fn drive(&mut self, track: &TrackProfile, entry: &Entry) -> TickOutcome {
        let speed_kph = physics::speed_kph(entry, self.tire_wear);

        self.tire_wear = (self.tire_wear + physics::wear_per_tick(track, &entry.driver)).min(1.0);
        self.distance_in_lap_km += physics::distance_per_tick_km(speed_kph);

        let mut sector_completed = false;
        let mut lap_completed = false;

        // At most one sector boundary per tick; any excess carries over.
        let sector_length = track.sector_length_km();
        if self.distance_in_lap_km >= sector_length {
            self.distance_in_lap_km -= sector_length;
            self.sector += 1;
            sector_completed = true;

            if self.sector > track.sectors {
                self.sector = 1;
                self.lap += 1;
                lap_completed = true;
            }
        }

        self.driving_ticks = self.driving_ticks.next();

        TickOutcome::Drove { speed_kph, sector_completed, lap_completed }
    }

    /// Order two drivers by race progress: further ahead sorts first.
    ///
    /// Compares laps, then sectors, then distance into the sector.
    pub fn cmp_progress(&self, other: &Self) -> Ordering {
        other
            .lap
            .cmp(&self.lap)
            .then(other.sector.cmp(&self.sector))
            .then(other.distance_in_lap_km.total_cmp(&self.distance_in_lap_km))
    }
}
