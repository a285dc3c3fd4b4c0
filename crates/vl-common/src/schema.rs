//! Ledger document naming and defaults.

/// File name of the ledger document, relative to the working directory.
pub const LEDGER_FILE_NAME: &str = "versions.json";

/// Version recorded when a ledger is initialized without an explicit version.
pub const DEFAULT_INITIAL_VERSION: &str = "1.0.0";

/// Number of components produced by a patch increment (major.minor.patch).
pub const INCREMENT_COMPONENTS: usize = 3;
