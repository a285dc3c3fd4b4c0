//! Command-line arguments.
//!
//! The flags are flat rather than subcommands: `--version`, `--update` and
//! `--delete` combine to pick one ledger operation, and no flags at all
//! means "increment the patch". Clap's own `--version` is disabled so the
//! name is free; the tool version is on `-V` / `--tool-version`.

use crate::logging::{LogFormat, LogOptions};
use crate::ops::Request;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Record versions of this repository against commits in versions.json
#[derive(Parser, Debug)]
#[command(name = "version-ledger", version, disable_version_flag = true)]
pub struct Cli {
    /// Version to set, or the existing version to update/delete
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Re-stamp a version with the current commit and time
    #[arg(long)]
    pub update: bool,

    /// Remove a version
    #[arg(long)]
    pub delete: bool,

    /// Ledger document path (default: versions.json)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Use this commit id instead of asking git
    #[arg(long, value_name = "ID", env = "VERSION_LEDGER_COMMIT_ID")]
    pub commit_id: Option<String>,

    /// Config file (JSON)
    #[arg(long, value_name = "PATH", env = "VERSION_LEDGER_CONFIG")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Diagnostic log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Print the tool version
    #[arg(short = 'V', long = "tool-version", action = ArgAction::Version)]
    pub tool_version: Option<bool>,
}

impl Cli {
    pub fn request(&self) -> Request {
        Request::new(self.version.clone(), self.update, self.delete)
    }

    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            verbosity: self.verbose,
            quiet: self.quiet,
            format: self.log_format,
        }
    }
}
