//! Configuration constants and utilities for tapcounter
//!
//! Counter bounds and display constants live here together with the
//! environment lookups used at startup. `AppConfig` combines them with the
//! parsed command line into the settings the controller is built from.

use crate::cmd_args::CommandLineArgs;
use std::path::PathBuf;
use std::time::Duration;

/// Value the counter holds when the application starts
pub const INITIAL_VALUE: i64 = 1234;

/// Lowest value reachable by decrementing
pub const MIN_VALUE: i64 = 0;

/// Highest value reachable by incrementing
pub const MAX_VALUE: i64 = 9999;

/// Minimum number of characters in the formatted display (zero padded)
pub const DISPLAY_WIDTH: usize = 4;

/// How long the event loop waits for input before polling again
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Environment variable holding the tracing filter directives
pub const LOG_LEVEL_ENV_VAR: &str = "TAPCOUNTER_LOG_LEVEL";

/// Environment variable naming the log file when `--log-file` is not given
pub const LOG_FILE_ENV_VAR: &str = "TAPCOUNTER_LOG_FILE";

/// Filter used when `TAPCOUNTER_LOG_LEVEL` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Get the tracing filter, checking the environment variable first
pub fn get_log_level() -> String {
    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Get the log file path from the environment, if any
pub fn get_log_file() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV_VAR)
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}

/// Startup settings resolved from the command line and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Start with the tap area split into decrement/increment halves
    pub start_in_split_mode: bool,
    /// Suppress the audible feedback cue
    pub quiet: bool,
    /// Where tracing output goes; `None` disables logging
    pub log_file: Option<PathBuf>,
    /// Tracing filter directives
    pub log_level: String,
}

impl AppConfig {
    /// Resolve settings, letting command line flags win over the environment
    pub fn from_args(args: &CommandLineArgs) -> Self {
        Self {
            start_in_split_mode: args.split(),
            quiet: args.quiet(),
            log_file: args.log_file().cloned().or_else(get_log_file),
            log_level: get_log_level(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_in_split_mode: false,
            quiet: false,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
