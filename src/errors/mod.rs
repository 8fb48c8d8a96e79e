use thiserror::Error;

use crate::domain::SummonerId;

/// Failures reading from the game store.
///
/// These are scoped to a single summoner: the report builder records them
/// and moves on to the next summoner.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data store unavailable: {0}")]
    Unavailable(#[from] r2d2::Error),

    #[error("summoner {0} not found")]
    SummonerNotFound(SummonerId),

    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read summoner ids from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid summoner id '{value}' on line {line}")]
    InvalidId { line: usize, value: String },
}
