use thiserror::Error;

use crate::store::StoreError;

/// Operation-level error for a CSV import run.
///
/// An `ImportError` always means the run produced no report: either the
/// input stream was structurally unreadable, or the member store failed
/// with something other than a uniqueness conflict.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The byte stream could not be parsed as delimited text (encoding
    /// failure, ragged row, missing header row).
    #[error("CSV read error: {0}")]
    CsvRead(String),

    /// The member store failed for a reason other than a duplicate key.
    /// Conflicts never surface here; they are classified into the
    /// duplicate partition instead.
    #[error("member store error: {0}")]
    Store(#[from] StoreError),
}
