//! Error types for loading a season.
//!
//! Only the load phase can fail. Queries over a loaded [`Season`] never
//! return errors.
//!
//! [`Season`]: crate::Season

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    /// The input file could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data line does not have the expected shape.
    #[error("line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

impl StatsError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        StatsError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Short, stable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            StatsError::SourceUnavailable { .. } => "SourceUnavailable",
            StatsError::MalformedRecord { .. } => "MalformedRecord",
        }
    }
}
