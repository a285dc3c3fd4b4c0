//! Semantic validation of loaded configuration.

use crate::config::LedgerConfig;
use vl_common::{Error, Result, VersionNumber};

/// Check values that deserialize fine but cannot be used.
pub fn validate(config: &LedgerConfig) -> Result<()> {
    VersionNumber::parse(&config.default_version).map_err(|e| {
        Error::Config(format!("default_version is not a dotted version: {e}"))
    })?;

    if config.ledger_file.as_os_str().is_empty() {
        return Err(Error::Config("ledger_file must not be empty".to_string()));
    }

    if config.git_program.trim().is_empty() {
        return Err(Error::Config("git_program must not be empty".to_string()));
    }

    Ok(())
}
