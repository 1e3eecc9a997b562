//! `pit-strategy` — optimal pit-lap search for the pit-strategy digital twin.
//!
//! For each driver the analyzer simulates one full race per candidate pit lap
//! (`1..=total_laps - 1`) and keeps the fastest.  Equal times resolve to the
//! earliest lap.
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`analyzer`] | `StrategyAnalyzer`, `SearchConfig`            |
//! | [`result`]   | `StrategyResult`, `CandidateEvaluation`       |
//! | [`error`]    | `SearchError`, `SearchResult`                 |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Candidates and drivers are evaluated on Rayon workers.  |
//! | `serde`    | `Serialize`/`Deserialize` on the result types.          |

pub mod analyzer;
pub mod error;
pub mod result;

#[cfg(test)]
mod tests;

pub use analyzer::{SearchConfig, StrategyAnalyzer};
pub use error::{SearchError, SearchResult};
pub use result::{CandidateEvaluation, StrategyResult};
