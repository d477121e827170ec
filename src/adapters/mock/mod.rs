//! Mock implementations for testing.
//!
//! This module provides test doubles for every host facility, enabling
//! engine and app tests without a terminal, file system or environment.
//!
//! # Available Mocks
//!
//! - [`InMemoryStore`] - Shared in-memory key-value storage with failure injection
//! - [`ManualObserver`] - Intersection observer driven by hand-built reports
//! - [`FixedAppearance`] - Preset system appearance signal

pub mod appearance;
pub mod observer;
pub mod storage;

pub use appearance::FixedAppearance;
pub use observer::ManualObserver;
pub use storage::InMemoryStore;
