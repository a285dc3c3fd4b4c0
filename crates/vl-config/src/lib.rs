//! Version ledger configuration loading and validation.
//!
//! This crate provides:
//! - The typed `LedgerConfig` read from `config.json`
//! - Config resolution (CLI → env → XDG → defaults)
//! - Semantic validation of loaded values

pub mod config;
pub mod resolve;
pub mod validate;

pub use config::LedgerConfig;
pub use resolve::{resolve_config, ConfigPaths, ConfigSource, ResolvedConfig};
pub use validate::validate;

/// Directory name under the user config dir.
pub const CONFIG_DIR_NAME: &str = "version_ledger";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";
