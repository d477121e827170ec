//! Log file setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file in the data
//! directory. The filter comes from `FOLIO_LOG`, falling back to the
//! configured default.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::{Config, LOG_FILTER_ENV};

/// Open (append) the log file, creating its directory.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build the filter from `FOLIO_LOG`, or `default_filter` if unset or invalid.
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the log path on success. Failure is non-fatal: the application
/// runs without logs.
pub fn init_logging(config: &Config) -> Option<PathBuf> {
    let path = config.log_path()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: logging disabled ({}): {}", path.display(), err);
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok()?;

    tracing::info!(version = crate::cli::VERSION, "folio starting");
    Some(path)
}
