//! Config resolution: CLI → env → XDG → defaults.
//!
//! The CLI flag and the environment variable both arrive as the explicit
//! path (clap merges them), so resolution only distinguishes an explicit
//! file from the per-user file and the built-in defaults.

use crate::config::LedgerConfig;
use crate::validate::validate;
use crate::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use vl_common::{Error, Result};

/// Candidate config file locations.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Named by `--config` or `VERSION_LEDGER_CONFIG`; must exist.
    pub explicit: Option<PathBuf>,
    /// Per-user file; used only if present.
    pub user: Option<PathBuf>,
}

impl ConfigPaths {
    /// Explicit path plus the XDG user file.
    pub fn discover(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            user: dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    User(PathBuf),
    Defaults,
}

/// A validated configuration and its origin.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: LedgerConfig,
    pub source: ConfigSource,
}

/// Resolve and validate the configuration.
pub fn resolve_config(paths: &ConfigPaths) -> Result<ResolvedConfig> {
    let resolved = if let Some(path) = &paths.explicit {
        ResolvedConfig {
            config: load_file(path)?,
            source: ConfigSource::Explicit(path.clone()),
        }
    } else if let Some(path) = paths.user.as_ref().filter(|p| p.is_file()) {
        ResolvedConfig {
            config: load_file(path)?,
            source: ConfigSource::User(path.clone()),
        }
    } else {
        ResolvedConfig {
            config: LedgerConfig::default(),
            source: ConfigSource::Defaults,
        }
    };

    validate(&resolved.config)?;
    debug!(source = ?resolved.source, config = ?resolved.config, "resolved configuration");
    Ok(resolved)
}

fn load_file(path: &Path) -> Result<LedgerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("invalid config {}: {e}", path.display())))
}
