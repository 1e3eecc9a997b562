//! `pit-scenario` — the immutable race setup every simulation reads from.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`scenario`]  | `Scenario` — track, entries, and lap count, validated     |
//! | [`builder`]   | `ScenarioBuilder` — fluent construction + validation      |
//! | [`loader`]    | `load_entries_csv`, `load_entries_reader`                 |
//! | [`error`]     | `ScenarioError`, `ScenarioResult<T>`                      |
//!
//! A `Scenario` is validated once, when it is built.  After that it is never
//! mutated, so simulation runs on any number of threads can share it by
//! reference without locking.

pub mod builder;
pub mod error;
pub mod loader;
pub mod scenario;


pub use builder::ScenarioBuilder;
pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_entries_csv, load_entries_reader};
pub use scenario::Scenario;
