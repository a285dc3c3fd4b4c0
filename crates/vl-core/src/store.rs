//! Reading and writing the ledger document.
//!
//! The document is always read whole and written whole with a single
//! `fs::write`; there is no append path and no locking.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use vl_common::{Error, Result, VersionLedger};

/// Location of a ledger document on disk.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load and parse the document. Missing fields are an error.
    pub fn load(&self) -> Result<VersionLedger> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::LedgerRead {
            path: self.path.clone(),
            source,
        })?;

        let ledger: VersionLedger =
            serde_json::from_str(&content).map_err(|source| Error::MalformedLedger {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), records = ledger.len(), "loaded ledger");
        Ok(ledger)
    }

    /// Serialize with two-space indentation and overwrite the document.
    pub fn save(&self, ledger: &VersionLedger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;
        fs::write(&self.path, json).map_err(|source| Error::LedgerWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), records = ledger.len(), "saved ledger");
        Ok(())
    }
}
