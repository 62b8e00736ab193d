//! Catalog ingestion error types.

use std::path::PathBuf;

use crate::domain::{DomainError, FlightId, InvalidMarket, TimeError};

/// Why a single catalog row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The row could not be tokenized
    #[error("malformed row: {0}")]
    Malformed(String),

    /// A required column is absent or blank
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A numeric column is not a non-negative integer
    #[error("invalid integer in {field}: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    /// Fares are non-negative
    #[error("negative fare: {0}")]
    NegativeFare(i64),

    /// A schedule column is not a valid timestamp
    #[error("invalid {field}: {source}")]
    InvalidTimestamp {
        field: &'static str,
        #[source]
        source: TimeError,
    },

    #[error(transparent)]
    InvalidMarket(#[from] InvalidMarket),

    #[error(transparent)]
    Schedule(#[from] DomainError),

    /// Flight ids are the catalog's key
    #[error("duplicate flight id {0}")]
    DuplicateFlight(FlightId),
}

/// A rejected row, with enough context to find it in the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct IngestError {
    /// 1-based line number in the source text.
    pub line: u64,

    /// The row's flight id, when that column parsed.
    pub flight: Option<FlightId>,

    pub kind: RecordError,
}

/// Errors that abort loading a whole catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part way through
    #[error("failed to read catalog: {0}")]
    Read(#[source] csv::Error),
}
