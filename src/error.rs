use std::io;
use thiserror::Error;

/// Failure while reading a word source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Failure that aborts population of a store.
///
/// Local sources never produce one of these; their failures are reported on the
/// diagnostics sink and trigger the remote fallback instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    RemoteFetch(SourceError),
}

/// Rejected query pattern. Callers are expected to re-prompt.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("You should provide a non-empty pattern")]
    Empty,

    #[error("The pattern provided should have a hint in the form of '*as*y'")]
    MissingWildcard,

    #[error("The pattern could not be compiled: {0}")]
    Compile(#[from] regex::Error),
}
