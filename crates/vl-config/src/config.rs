//! Ledger configuration types.

use serde::Deserialize;
use std::path::PathBuf;
use vl_common::{DEFAULT_INITIAL_VERSION, LEDGER_FILE_NAME};

/// Settings for a ledger invocation.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    /// Path of the ledger document, relative to the working directory
    /// unless absolute.
    pub ledger_file: PathBuf,

    /// Version recorded when initializing without `--version`.
    pub default_version: String,

    /// Program used to look up the current commit.
    pub git_program: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            ledger_file: PathBuf::from(LEDGER_FILE_NAME),
            default_version: DEFAULT_INITIAL_VERSION.to_string(),
            git_program: "git".to_string(),
        }
    }
}
