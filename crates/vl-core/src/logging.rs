//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only the one-line outcome.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;
use vl_common::{Error, Result};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "VERSION_LEDGER_LOG";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging knobs taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub verbosity: u8,
    pub quiet: bool,
    pub format: LogFormat,
}

impl LogOptions {
    /// Level used when `VERSION_LEDGER_LOG` is unset.
    pub fn default_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber.
pub fn init_logging(options: &LogOptions) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(options.default_level()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match options.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| Error::Config(format!("failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let mut options = LogOptions::default();
        assert_eq!(options.default_level(), "warn");
        options.verbosity = 1;
        assert_eq!(options.default_level(), "info");
        options.verbosity = 2;
        assert_eq!(options.default_level(), "debug");
        options.verbosity = 7;
        assert_eq!(options.default_level(), "trace");
    }

    #[test]
    fn test_quiet_overrides_verbosity() {
        let options = LogOptions {
            verbosity: 3,
            quiet: true,
            format: LogFormat::Text,
        };
        assert_eq!(options.default_level(), "error");
    }
}
