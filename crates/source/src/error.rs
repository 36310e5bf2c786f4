//! Record source error types.

use std::path::PathBuf;

use opex_core::IngestError;
use opex_shared::AppError;
use thiserror::Error;

/// Errors raised while loading, writing or generating ledgers.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File could not be opened, created or flushed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// CSV framing error (bad quoting, invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row failed the ledger schema.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The generator year is outside the supported calendar range.
    #[error("Invalid year for synthetic ledger: {0}")]
    InvalidYear(i32),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Io { .. } => Self::Io(err.to_string()),
            SourceError::Csv(_) | SourceError::Ingest(_) => Self::Input(err.to_string()),
            SourceError::InvalidYear(_) => Self::Generator(err.to_string()),
        }
    }
}
