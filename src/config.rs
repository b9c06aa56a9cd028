use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
///
/// Only logging is configurable this way; what ends up in the report is
/// decided by the command line alone.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Directory for daily rotating log files
    /// Unset: log to the console only
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - LOG_DIR: directory for `info.log` / `error.log` daily files
    /// - RUST_LOG: log filter, read later by the subscriber
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let log_dir = env::var("LOG_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Config { log_dir }
    }
}
