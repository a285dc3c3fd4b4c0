//! Version ledger manager.
//!
//! Keeps `versions.json`, an ordered history of declared versions, each
//! tagged with the commit and time it was declared. One invocation applies
//! one operation: initialize, increment, set, update, or delete.

pub mod cli;
pub mod commit;
pub mod context;
pub mod exit_codes;
pub mod logging;
pub mod ops;
pub mod store;

use crate::cli::Cli;
use crate::commit::{CommitSource, FixedCommitSource, GitCommitSource};
use crate::context::InvocationContext;
use crate::ops::{LedgerManager, Outcome};
use crate::store::LedgerStore;
use tracing::debug;
use vl_common::Result;
use vl_config::{resolve_config, ConfigPaths};

pub use vl_common::{Error, VersionLedger, VersionRecord};

/// Resolve configuration, capture the commit and time, run one operation.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let resolved = resolve_config(&ConfigPaths::discover(cli.config.clone()))?;
    let mut config = resolved.config;
    if let Some(file) = &cli.file {
        config.ledger_file = file.clone();
    }

    let source: Box<dyn CommitSource> = match &cli.commit_id {
        Some(commit) => Box::new(FixedCommitSource::new(commit.as_str())),
        None => Box::new(GitCommitSource::new(config.git_program.as_str())),
    };
    let ctx = InvocationContext::capture(source.as_ref())?;
    debug!(commit = %ctx.commit_id, timestamp = %ctx.timestamp, "captured invocation context");

    let manager = LedgerManager::new(LedgerStore::new(config.ledger_file), config.default_version);
    manager.execute(&cli.request(), &ctx)
}
