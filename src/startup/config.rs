//! Runtime configuration.
//!
//! Defaults mirror the web page's animation timings. Each can be overridden from
//! the environment:
//!
//! | Variable              | Effect                                        |
//! |-----------------------|-----------------------------------------------|
//! | `FOLIO_HOME`          | Directory for preferences and the log file    |
//! | `FOLIO_TYPEWRITER_MS` | Typewriter tick interval in milliseconds      |
//! | `FOLIO_THRESHOLD`     | Reveal visibility threshold                   |
//! | `FOLIO_NO_OBSERVER`   | Disable viewport observation (reveal at once) |
//! | `FOLIO_PARTICLES`     | Particles behind the hero (0 turns them off)  |
//! | `FOLIO_LOG`           | Log filter directive                          |

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::file_store::{PREFERENCES_DIR, PREFERENCES_FILE};
use crate::ui::particles::DEFAULT_PARTICLE_COUNT;

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "folio.log";

/// Environment variable naming the log filter.
pub const LOG_FILTER_ENV: &str = "FOLIO_LOG";

/// Configuration for the application.
///
/// # Example
///
/// ```
/// use folio::startup::Config;
///
/// let config = Config::default()
///     .with_typewriter_interval_ms(50)
///     .with_observe_viewport(false);
/// assert_eq!(config.typewriter_interval_ms, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Frame timer period (default: 16ms)
    pub frame_interval: Duration,
    /// Typewriter tick interval in milliseconds (default: 100)
    pub typewriter_interval_ms: u64,
    /// Fraction of a section that must be visible to reveal it (default: 0.1)
    pub reveal_threshold: f32,
    /// Use the scroll viewport for observation; when false every section
    /// reveals at mount
    pub observe_viewport: bool,
    /// Particles drifting behind the hero (default: 50)
    pub particle_count: usize,
    /// Data directory; `None` means `~/.folio`
    pub data_dir: Option<PathBuf>,
    /// Log filter used when `FOLIO_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            typewriter_interval_ms: 100,
            reveal_threshold: 0.1,
            observe_viewport: true,
            particle_count: DEFAULT_PARTICLE_COUNT,
            data_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frame timer period.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Set the typewriter tick interval.
    pub fn with_typewriter_interval_ms(mut self, interval_ms: u64) -> Self {
        self.typewriter_interval_ms = interval_ms;
        self
    }

    /// Set the reveal threshold.
    pub fn with_reveal_threshold(mut self, threshold: f32) -> Self {
        self.reveal_threshold = threshold;
        self
    }

    /// Set whether sections reveal on scroll.
    pub fn with_observe_viewport(mut self, observe: bool) -> Self {
        self.observe_viewport = observe;
        self
    }

    /// Set the number of hero particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the fallback log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Build config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("FOLIO_HOME").filter(|v| !v.trim().is_empty()) {
            config = config.with_data_dir(dir);
        }

        if let Some(raw) = lookup("FOLIO_TYPEWRITER_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config = config.with_typewriter_interval_ms(ms),
                _ => tracing::warn!(value = %raw, "Ignoring invalid FOLIO_TYPEWRITER_MS"),
            }
        }

        if let Some(raw) = lookup("FOLIO_THRESHOLD") {
            match raw.trim().parse::<f32>() {
                Ok(t) if t > 0.0 && t <= 1.0 => config = config.with_reveal_threshold(t),
                _ => tracing::warn!(value = %raw, "Ignoring invalid FOLIO_THRESHOLD"),
            }
        }

        if lookup("FOLIO_NO_OBSERVER").is_some() {
            config = config.with_observe_viewport(false);
        }

        if let Some(raw) = lookup("FOLIO_PARTICLES") {
            match raw.trim().parse::<usize>() {
                Ok(count) => config = config.with_particle_count(count),
                Err(_) => tracing::warn!(value = %raw, "Ignoring invalid FOLIO_PARTICLES"),
            }
        }

        config
    }

    /// Resolved data directory.
    ///
    /// Returns `None` if no directory was configured and the home directory
    /// cannot be determined.
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        match &self.data_dir {
            Some(dir) => Some(dir.clone()),
            None => dirs::home_dir().map(|home| home.join(PREFERENCES_DIR)),
        }
    }

    /// Path of the preferences file.
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.resolved_data_dir().map(|dir| dir.join(PREFERENCES_FILE))
    }

    /// Path of the log file.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.resolved_data_dir().map(|dir| dir.join(LOG_FILE))
    }
}
