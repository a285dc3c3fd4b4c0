//! Version ledger common types and errors.
//!
//! This crate provides the foundational types shared by the ledger tooling:
//! - The persisted ledger document (`VersionLedger`, `VersionRecord`)
//! - Dotted version numbers and their numeric comparison
//! - The unified error type
//! - Document naming constants

pub mod error;
pub mod ledger;
pub mod schema;
pub mod version;

pub use error::{Error, Result};
pub use ledger::{VersionLedger, VersionRecord};
pub use schema::{DEFAULT_INITIAL_VERSION, LEDGER_FILE_NAME};
pub use version::{compare_versions, VersionNumber};
