//! Search output types.

use pit_core::DriverId;

/// The best single-stop strategy found for one driver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyResult {
    pub driver:          DriverId,
    pub pit_lap:         u32,
    pub total_time_secs: f64,
}

/// Race time for one candidate pit lap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateEvaluation {
    pub pit_lap:         u32,
    pub total_time_secs: f64,
}

/// Pick the fastest candidate.  Equal times go to the earlier pit lap.
///
/// `evaluations` must be in ascending `pit_lap` order.  Returns `None` for
/// an empty slice.
pub fn select_best(evaluations: &[CandidateEvaluation]) -> Option<CandidateEvaluation> {
    let (first, rest) = evaluations.split_first()?;
    Some(rest.iter().fold(*first, |best, eval| {
        if eval.total_time_secs < best.total_time_secs { *eval } else { best }
    }))
}
