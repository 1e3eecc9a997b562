use pit_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("a {total_laps}-lap race has no valid single-stop pit lap")]
    NoCandidateLaps { total_laps: u32 },

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("failed to build search thread pool: {0}")]
    ThreadPool(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
