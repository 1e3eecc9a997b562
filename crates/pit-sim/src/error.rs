use pit_core::DriverId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("{driver} is out of range for a field of {count} entries")]
    UnknownDriver { driver: DriverId, count: usize },
}

pub type SimResult<T> = Result<T, SimError>;
