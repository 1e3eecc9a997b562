//! Profile validation errors.
//!
//! Higher crates wrap `CoreError` as one variant of their own error enum via
//! `#[from]`, so a bad profile surfaces unchanged through scenario
//! construction.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("{what} must be within [0, 1], got {value}")]
    OutOfUnitRange { what: &'static str, value: f64 },

    #[error("track must have at least one sector")]
    NoSectors,

    #[error("lap length must be a positive number of kilometres, got {0}")]
    NonPositiveLapLength(f64),

    #[error("tire-wear factor must be a non-negative finite number, got {0}")]
    InvalidWearFactor(f64),

    #[error("car {car:?} has zero engine power and could never finish a lap")]
    NoEnginePower { car: String },
}

/// Shorthand result type for profile validation.
pub type CoreResult<T> = Result<T, CoreError>;
