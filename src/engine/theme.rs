//! Process-wide theme preference.
//!
//! [`ThemePreferenceStore`] is the single writer of the light/dark mode. It
//! is created once per process and passed by reference to every view that
//! needs the mode. `toggle` persists synchronously and notifies subscribers
//! before returning, so every reader sees the new mode as soon as the call
//! completes.
//!
//! Persistence is best effort. A store that cannot be read behaves as if
//! nothing was saved; a store that cannot be written still flips the mode
//! for the current session.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::SwallowExt;
use crate::traits::{KeyValueStore, SystemAppearance};

/// Key under which the user's override is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Persisted spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode: {}", other)),
        }
    }
}

/// Where the current mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeSource {
    /// Sampled from the host appearance signal
    #[default]
    SystemDefault,
    /// Chosen by the user and persisted
    UserOverride,
}

/// Current theme and its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub source: ThemeSource,
}

type ThemeListener = Box<dyn FnMut(ThemeState)>;

/// Single-writer, synchronously broadcast theme preference.
pub struct ThemePreferenceStore {
    storage: Box<dyn KeyValueStore>,
    appearance: Box<dyn SystemAppearance>,
    state: ThemeState,
    initialized: bool,
    listeners: Vec<ThemeListener>,
}

impl fmt::Debug for ThemePreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("state", &self.state)
            .field("initialized", &self.initialized)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ThemePreferenceStore {
    /// Create an uninitialized store. Call [`ThemePreferenceStore::init`]
    /// once at startup.
    pub fn new<S, A>(storage: S, appearance: A) -> Self
    where
        S: KeyValueStore + 'static,
        A: SystemAppearance + 'static,
    {
        Self {
            storage: Box::new(storage),
            appearance: Box::new(appearance),
            state: ThemeState::default(),
            initialized: false,
            listeners: Vec::new(),
        }
    }

    /// Resolve the starting mode. Later calls are no-ops.
    pub fn init(&mut self) -> ThemeMode {
        if self.initialized {
            return self.state.mode;
        }
        self.initialized = true;

        let persisted = self
            .storage
            .get(THEME_STORAGE_KEY)
            .swallow("theme_init_read", None);

        self.state = match persisted.as_deref().map(ThemeMode::from_str) {
            Some(Ok(mode)) => ThemeState {
                mode,
                source: ThemeSource::UserOverride,
            },
            Some(Err(err)) => {
                debug!("Theme: ignoring persisted value ({})", err);
                self.system_state()
            }
            None => self.system_state(),
        };

        info!(
            mode = %self.state.mode,
            source = ?self.state.source,
            "Theme: initialized"
        );
        self.state.mode
    }

    fn system_state(&self) -> ThemeState {
        ThemeState {
            mode: self.appearance.preferred_mode().unwrap_or_default(),
            source: ThemeSource::SystemDefault,
        }
    }

    /// Flip the mode, persist it as a user override and notify subscribers.
    pub fn toggle(&mut self) -> ThemeMode {
        self.state = ThemeState {
            mode: self.state.mode.flipped(),
            source: ThemeSource::UserOverride,
        };

        self.storage
            .set(THEME_STORAGE_KEY, self.state.mode.as_str())
            .swallow("theme_toggle_write", ());

        info!(mode = %self.state.mode, "Theme: toggled");
        self.broadcast();
        self.state.mode
    }

    /// Drop the user override and follow the host appearance again.
    pub fn reset_to_system(&mut self) -> ThemeMode {
        self.storage
            .remove(THEME_STORAGE_KEY)
            .swallow("theme_reset_remove", ());

        self.state = self.system_state();
        info!(mode = %self.state.mode, "Theme: reset to system default");
        self.broadcast();
        self.state.mode
    }

    fn broadcast(&mut self) {
        let state = self.state;
        for listener in &mut self.listeners {
            listener(state);
        }
    }

    /// Register a callback run synchronously after every change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(ThemeState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn current_mode(&self) -> ThemeMode {
        self.state.mode
    }

    pub fn source(&self) -> ThemeSource {
        self.state.source
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn is_dark(&self) -> bool {
        self.state.mode.is_dark()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
