//! Error taxonomy for the rename pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of one rename invocation. Every variant is terminal: nothing is
/// written until the final rename, so there is no state to roll back and no
/// retry anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The file's base name contains no digit, so it cannot be an ISBN.
    /// Raised before any network call.
    #[error("{0} does not look like a valid isbn")]
    InvalidIsbn(String),

    /// Network, HTTP status, or JSON decoding failure. Single attempt.
    #[error("catalog lookup failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog returned zero records for the ISBN.
    #[error("no records returned for {0}")]
    NotFound(String),

    /// The catalog returned records, but none carried title, authors and
    /// publisher together.
    #[error("no valid records returned for {0}")]
    NoValidRecords(String),

    /// Console I/O failed while reading the disambiguation selection.
    #[error("failed to read selection: {0}")]
    Io(#[from] std::io::Error),

    /// The final filesystem rename failed (permissions, name collision, ...).
    #[error("could not rename to {}: {source}", path.display())]
    Provider {
        path: PathBuf,
        source: std::io::Error,
    },
}
