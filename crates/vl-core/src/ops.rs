//! Ledger operations and dispatch.
//!
//! One invocation performs exactly one operation, chosen from the flags and
//! whether the document exists. Operations mutate the in-memory ledger;
//! the manager writes the document once afterwards, and only when the
//! outcome changed something.

use crate::context::InvocationContext;
use crate::store::LedgerStore;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, info};
use vl_common::{Error, Result, VersionLedger, VersionNumber, VersionRecord};

/// Flags that select the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub version: Option<String>,
    pub update: bool,
    pub delete: bool,
}

impl Request {
    /// An empty `--version=` counts as absent.
    pub fn new(version: Option<String>, update: bool, delete: bool) -> Self {
        Self {
            version: version.filter(|v| !v.is_empty()),
            update,
            delete,
        }
    }
}

/// The single mutation an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Initialize { version: Option<String> },
    UpdateSpecific(String),
    DeleteSpecific(String),
    UpdateLatest,
    DeleteLatest,
    SetVersion(String),
    Increment,
}

impl Operation {
    /// Pick the operation; the first matching rule wins.
    pub fn select(request: &Request, ledger_exists: bool) -> Self {
        if !ledger_exists {
            return Operation::Initialize {
                version: request.version.clone(),
            };
        }

        match (&request.version, request.update, request.delete) {
            (Some(v), true, _) => Operation::UpdateSpecific(v.clone()),
            (Some(v), false, true) => Operation::DeleteSpecific(v.clone()),
            (None, true, _) => Operation::UpdateLatest,
            (None, false, true) => Operation::DeleteLatest,
            (Some(v), false, false) => Operation::SetVersion(v.clone()),
            (None, false, false) => Operation::Increment,
        }
    }
}

/// What happened. Rejections leave the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Initialized(VersionRecord),
    Incremented(VersionRecord),
    VersionSet(VersionRecord),
    NotGreater { candidate: String, latest: String },
    Updated(VersionRecord),
    LatestUpdated(VersionRecord),
    Deleted { version: String },
    LatestDeleted { version: String },
    NotFound { version: String },
}

impl Outcome {
    /// Whether the ledger changed and must be written.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Outcome::NotGreater { .. } | Outcome::NotFound { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Initialized(r) => write!(
                f,
                "Version initialized to {} with commit ID {} at {}",
                r.version, r.latest_commit_id, r.created_datetime
            ),
            Outcome::Incremented(r) => write!(
                f,
                "Version incremented to {} with commit ID {} at {}",
                r.version, r.latest_commit_id, r.created_datetime
            ),
            Outcome::VersionSet(r) => write!(
                f,
                "Version set to {} with commit ID {} at {}",
                r.version, r.latest_commit_id, r.created_datetime
            ),
            Outcome::NotGreater { candidate, latest } => write!(
                f,
                "Error: Provided version {candidate} is not greater than the latest version {latest}"
            ),
            Outcome::Updated(r) => write!(
                f,
                "Version {} updated with commit ID {} at {}",
                r.version, r.latest_commit_id, r.created_datetime
            ),
            Outcome::LatestUpdated(r) => write!(
                f,
                "Latest version ({}) updated with commit ID {} at {}",
                r.version, r.latest_commit_id, r.created_datetime
            ),
            Outcome::Deleted { version } => write!(f, "Version {version} deleted."),
            Outcome::LatestDeleted { version } => write!(f, "Latest version ({version}) deleted."),
            Outcome::NotFound { version } => write!(f, "Version {version} not found."),
        }
    }
}

/// Apply an operation to an existing ledger.
///
/// `Initialize` does not apply to a loaded ledger and is handled by
/// [`LedgerManager::execute`].
pub fn apply(
    operation: &Operation,
    ledger: &mut VersionLedger,
    ctx: &InvocationContext,
) -> Result<Outcome> {
    match operation {
        Operation::Initialize { version } => Err(Error::Internal(format!(
            "cannot initialize over an existing ledger (requested {})",
            version.as_deref().unwrap_or("default version")
        ))),
        Operation::UpdateSpecific(version) => Ok(update_specific(ledger, version, ctx)),
        Operation::DeleteSpecific(version) => Ok(delete_specific(ledger, version)),
        Operation::UpdateLatest => update_latest(ledger, ctx),
        Operation::DeleteLatest => delete_latest(ledger),
        Operation::SetVersion(version) => set_version(ledger, version, ctx),
        Operation::Increment => increment(ledger, ctx),
    }
}

fn update_specific(ledger: &mut VersionLedger, version: &str, ctx: &InvocationContext) -> Outcome {
    match ledger.position(version) {
        Some(index) => {
            let record = &mut ledger.versions[index];
            record.restamp(&ctx.commit_id, &ctx.timestamp);
            Outcome::Updated(record.clone())
        }
        None => Outcome::NotFound {
            version: version.to_string(),
        },
    }
}

fn delete_specific(ledger: &mut VersionLedger, version: &str) -> Outcome {
    match ledger.position(version).and_then(|index| ledger.remove(index)) {
        Some(removed) => Outcome::Deleted {
            version: removed.version,
        },
        None => Outcome::NotFound {
            version: version.to_string(),
        },
    }
}

fn update_latest(ledger: &mut VersionLedger, ctx: &InvocationContext) -> Result<Outcome> {
    let record = ledger.latest_mut().ok_or(Error::EmptyLedger)?;
    record.restamp(&ctx.commit_id, &ctx.timestamp);
    Ok(Outcome::LatestUpdated(record.clone()))
}

fn delete_latest(ledger: &mut VersionLedger) -> Result<Outcome> {
    let removed = ledger.pop().ok_or(Error::EmptyLedger)?;
    Ok(Outcome::LatestDeleted {
        version: removed.version,
    })
}

fn set_version(
    ledger: &mut VersionLedger,
    candidate: &str,
    ctx: &InvocationContext,
) -> Result<Outcome> {
    let latest = ledger.latest().ok_or(Error::EmptyLedger)?.version.clone();
    let ordering = VersionNumber::parse(candidate)?.cmp(&VersionNumber::parse(&latest)?);

    if ordering != Ordering::Greater {
        return Ok(Outcome::NotGreater {
            candidate: candidate.to_string(),
            latest,
        });
    }

    let record = VersionRecord::new(candidate, &ctx.commit_id, &ctx.timestamp);
    ledger.push(record.clone());
    Ok(Outcome::VersionSet(record))
}

fn increment(ledger: &mut VersionLedger, ctx: &InvocationContext) -> Result<Outcome> {
    let latest = ledger.latest().ok_or(Error::EmptyLedger)?;
    let next = VersionNumber::parse(&latest.version)?.next_patch()?;

    let record = VersionRecord::new(next.to_string(), &ctx.commit_id, &ctx.timestamp);
    ledger.push(record.clone());
    Ok(Outcome::Incremented(record))
}

/// Runs one operation against a ledger document.
#[derive(Debug, Clone)]
pub struct LedgerManager {
    store: LedgerStore,
    default_version: String,
}

impl LedgerManager {
    pub fn new(store: LedgerStore, default_version: impl Into<String>) -> Self {
        Self {
            store,
            default_version: default_version.into(),
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Select, apply, and persist. Rejected outcomes write nothing.
    pub fn execute(&self, request: &Request, ctx: &InvocationContext) -> Result<Outcome> {
        let operation = Operation::select(request, self.store.exists());
        debug!(?operation, path = %self.store.path().display(), "selected operation");

        if let Operation::Initialize { version } = &operation {
            let version = version.as_deref().unwrap_or(&self.default_version);
            let record = VersionRecord::new(version, &ctx.commit_id, &ctx.timestamp);
            self.store.save(&VersionLedger::seeded(record.clone()))?;
            info!(version, "initialized ledger");
            return Ok(Outcome::Initialized(record));
        }

        let mut ledger = self.store.load()?;
        let outcome = apply(&operation, &mut ledger, ctx)?;

        if outcome.is_mutation() {
            self.store.save(&ledger)?;
            info!(records = ledger.len(), "ledger updated");
        } else {
            info!(%outcome, "ledger unchanged");
        }

        Ok(outcome)
    }
}
