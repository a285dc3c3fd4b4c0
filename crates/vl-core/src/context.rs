//! Per-invocation facts captured once before any ledger work.

use crate::commit::CommitSource;
use chrono::{DateTime, SecondsFormat, Utc};
use vl_common::Result;

/// Commit id and timestamp shared by every record touched in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub commit_id: String,
    pub timestamp: String,
}

impl InvocationContext {
    pub fn new(commit_id: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            commit_id: commit_id.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Look up the commit and read the clock now.
    pub fn capture(source: &dyn CommitSource) -> Result<Self> {
        Self::capture_at(source, Utc::now())
    }

    pub fn capture_at(source: &dyn CommitSource, now: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            commit_id: source.head_commit()?,
            timestamp: format_timestamp(now),
        })
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
