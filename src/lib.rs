//! Folio - a terminal portfolio page with scroll-triggered reveals, a
//! typewriter hero caption, a persisted light/dark theme and hover effects.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod content;
pub mod engine;
pub mod error;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
