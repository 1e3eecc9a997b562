use pit_core::{CoreError, DriverId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid profile: {0}")]
    Profile(#[from] CoreError),

    #[error("{drivers} driver profiles but {cars} car profiles")]
    EntryCountMismatch { drivers: usize, cars: usize },

    #[error("scenario has no entries")]
    NoEntries,

    #[error("too many entries: {0}")]
    TooManyEntries(usize),

    #[error("{driver} is out of range for a field of {count} entries")]
    UnknownDriver { driver: DriverId, count: usize },

    #[error("entry list parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
