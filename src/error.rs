//! Crate-wide error type.
//!
//! Every failure is terminal for the operation that raised it: the inputs are
//! already on disk, so re-invoking with corrected input is the only recovery
//! path. Nothing retries and nothing returns partial results.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Out-of-range generation input (node count, edge count, probability).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A table row or edge line that does not match the documented format.
    #[error("malformed input in '{source_id}' line {line}: {reason}")]
    MalformedInput {
        source_id: String,
        line: usize,
        reason: String,
    },

    /// A timing table with no data rows after the header.
    #[error("no data rows in '{0}'")]
    EmptyTable(String),

    /// A normalization constant that cannot divide a timing series.
    #[error("invalid baseline {0}: baseline time must be positive")]
    InvalidBaseline(f64),

    /// A dataset referenced by a comparison but present in no variant group.
    #[error("dataset '{0}' is not present in any variant group")]
    MissingDatasetKey(String),

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
