//! Trait abstractions for the host facilities the engine consumes.
//!
//! The interaction engine never talks to the terminal, the file system or
//! the environment directly. Each host facility is a trait so the production
//! adapters in [`crate::adapters`] can be swapped for the in-memory doubles
//! in [`crate::adapters::mock`] under test.
//!
//! # Traits
//!
//! - [`IntersectionObserver`] - Element visibility ratio notifications
//! - [`KeyValueStore`] - Durable string storage for the theme preference
//! - [`SystemAppearance`] - The host's preferred color scheme

pub mod appearance;
pub mod observer;
pub mod storage;

pub use appearance::SystemAppearance;
pub use observer::{IntersectionEntry, IntersectionObserver, ObservationError, ObservationId};
pub use storage::{KeyValueStore, StorageError};
