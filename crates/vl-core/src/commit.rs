//! Current-commit lookup.
//!
//! The ledger records the commit checked out when each version was
//! declared. Lookup happens once per invocation through a `CommitSource`.

use std::path::PathBuf;
use std::process::Command;
use tracing::debug;
use vl_common::{Error, Result};

/// Something that can name the commit currently checked out.
pub trait CommitSource {
    fn head_commit(&self) -> Result<String>;
}

/// Asks git via `rev-parse HEAD`.
#[derive(Debug, Clone)]
pub struct GitCommitSource {
    program: String,
    working_dir: Option<PathBuf>,
}

impl GitCommitSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            working_dir: None,
        }
    }

    /// Run git in `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl CommitSource for GitCommitSource {
    fn head_commit(&self) -> Result<String> {
        let mut command = Command::new(&self.program);
        command.args(["rev-parse", "HEAD"]);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|e| Error::CommitLookup(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::CommitLookup(format!(
                "{} rev-parse HEAD exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let commit = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if commit.is_empty() {
            return Err(Error::CommitLookup(format!(
                "{} rev-parse HEAD printed nothing",
                self.program
            )));
        }

        debug!(commit = %commit, "resolved HEAD");
        Ok(commit)
    }
}

/// A commit id supplied up front, bypassing git.
#[derive(Debug, Clone)]
pub struct FixedCommitSource {
    commit: String,
}

impl FixedCommitSource {
    pub fn new(commit: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
        }
    }
}

impl CommitSource for FixedCommitSource {
    fn head_commit(&self) -> Result<String> {
        let commit = self.commit.trim();
        if commit.is_empty() {
            return Err(Error::CommitLookup("commit id override is empty".to_string()));
        }
        Ok(commit.to_string())
    }
}
