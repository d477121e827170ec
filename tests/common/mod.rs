//! Common test utilities for integration tests.
//!
//! This module provides an app builder over in-memory facilities and
//! helpers for driving the app clock and reading rendered frames.
//!
//! # Example
//!
//! ```ignore
//! use common::TestAppBuilder;
//!
//! let (mut app, store) = TestAppBuilder::new().with_size(100, 30).build();
//! ```

#![allow(dead_code)]

use std::time::Duration;

use folio::adapters::{FixedAppearance, InMemoryStore};
use folio::app::{App, AppEvent};
use folio::engine::{ThemeMode, ThemePreferenceStore};
use folio::startup::Config;
use folio::ui;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Frame period used when pumping ticks.
pub const FRAME: Duration = Duration::from_millis(16);

/// Builder for an [`App`] over in-memory storage.
pub struct TestAppBuilder {
    config: Config,
    store: InMemoryStore,
    system: Option<ThemeMode>,
    size: (u16, u16),
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            store: InMemoryStore::new(),
            system: Some(ThemeMode::Light),
            size: (100, 30),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_store(mut self, store: InMemoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_system(mut self, mode: Option<ThemeMode>) -> Self {
        self.system = mode;
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }

    /// Build the app. The returned store shares entries with the app's.
    pub fn build(self) -> (App, InMemoryStore) {
        let theme = ThemePreferenceStore::new(self.store.clone(), FixedAppearance::new(self.system));
        let app = App::new(self.config, theme, self.size).expect("valid test config");
        (app, self.store)
    }
}

/// Tick the app clock forward by `total` in frame steps.
pub fn run_for(app: &mut App, total: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        app.handle_event(AppEvent::Tick(FRAME));
        elapsed += FRAME;
    }
}

/// Render one frame into a test buffer.
pub fn draw(app: &App) -> Buffer {
    let ctx = app.layout();
    let backend = TestBackend::new(ctx.width, ctx.height);
    let mut terminal = Terminal::new(backend).expect("test backend");
    terminal.draw(|f| ui::render(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

/// Symbols of row `y`.
pub fn buffer_row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

/// Whole buffer as newline-separated rows.
pub fn buffer_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| buffer_row(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}
