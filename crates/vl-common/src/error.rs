//! Error types for the version ledger.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for version ledger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the version ledger.
///
/// Only structural failures live here. Business rejections (a version that
/// is not found, a candidate that is not greater than the latest) are
/// ordinary outcomes and never surface as an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    // Ledger document errors (20-29)
    #[error("failed to read ledger {path}: {source}")]
    LedgerRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write ledger {path}: {source}")]
    LedgerWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ledger {path}: {source}")]
    MalformedLedger {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ledger has no versions; initialize or set a version first")]
    EmptyLedger,

    // Version errors (30-39)
    #[error("invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    // Source control errors (40-49)
    #[error("failed to look up current commit: {0}")]
    CommitLookup(String),

    // Internal errors (60-69)
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns the error code for this error type.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::LedgerRead { .. } => 20,
            Error::LedgerWrite { .. } => 21,
            Error::MalformedLedger { .. } => 22,
            Error::EmptyLedger => 23,
            Error::InvalidVersion { .. } => 30,
            Error::CommitLookup(_) => 40,
            Error::Json(_) => 61,
            Error::Internal(_) => 69,
        }
    }

    pub(crate) fn invalid_version(version: &str, reason: impl Into<String>) -> Self {
        Error::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
    }
}
