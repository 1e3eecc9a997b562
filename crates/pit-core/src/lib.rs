//! `pit-core` — foundational types for the pit-strategy digital twin.
//!
//! This crate is a dependency of every other `pit-*` crate.  It has no
//! `pit-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DriverId`, `TrackId`                                 |
//! | [`time`]        | `Tick`, `RaceClock`, `TICK_SECONDS`                   |
//! | [`profile`]     | `TrackProfile`, `DriverProfile`, `CarProfile`, `Entry` |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod profile;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{DriverId, TrackId};
pub use profile::{CarProfile, DriverProfile, Entry, TrackProfile};
pub use time::{RaceClock, TICK_SECONDS, Tick};
