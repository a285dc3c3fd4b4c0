//! Exit codes for the version-ledger CLI.
//!
//! Business rejections (version not found, version not greater) are normal
//! outcomes and exit with `Clean`. Only structural failures are non-zero.

use vl_common::Error;

/// Exit codes for version-ledger invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed or was rejected by a ledger rule
    Clean = 0,

    /// Configuration error
    ConfigError = 10,

    /// Ledger document unreadable, malformed, or empty
    LedgerError = 11,

    /// Version string could not be parsed or incremented
    VersionError = 12,

    /// I/O error
    IoError = 13,

    /// Current commit could not be determined
    SourceControlError = 14,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map a structural failure to its exit code.
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Config(_) => ExitCode::ConfigError,
            Error::LedgerRead { .. }
            | Error::MalformedLedger { .. }
            | Error::EmptyLedger => ExitCode::LedgerError,
            Error::LedgerWrite { .. } => ExitCode::IoError,
            Error::InvalidVersion { .. } => ExitCode::VersionError,
            Error::CommitLookup(_) => ExitCode::SourceControlError,
            Error::Json(_) | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_is_zero() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::LedgerError.as_i32(), 11);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            ExitCode::from_error(&Error::EmptyLedger),
            ExitCode::LedgerError
        );
        assert_eq!(
            ExitCode::from_error(&Error::Config("bad".into())),
            ExitCode::ConfigError
        );
        assert_eq!(
            ExitCode::from_error(&Error::CommitLookup("no repo".into())),
            ExitCode::SourceControlError
        );
        let invalid = Error::InvalidVersion {
            version: "a".into(),
            reason: "not a number".into(),
        };
        assert_eq!(ExitCode::from_error(&invalid), ExitCode::VersionError);
        assert_eq!(
            ExitCode::from_error(&Error::Internal("misuse".into())),
            ExitCode::InternalError
        );
        assert_eq!(i32::from(ExitCode::IoError), 13);
    }
}
