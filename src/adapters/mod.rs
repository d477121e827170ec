//! Concrete implementations of the host facility traits.
//!
//! # Adapters
//!
//! - [`ScrollViewport`] - Intersection observation over the scrolled document
//! - [`FileStore`] - JSON file key-value storage under `~/.folio`
//! - [`SessionStore`] - Process-lifetime storage when there is no data directory
//! - [`EnvAppearance`] - Appearance signal from the process environment
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all facilities:
//! - [`mock::InMemoryStore`] - Shared in-memory storage with failure injection
//! - [`mock::ManualObserver`] - Hand-driven intersection observer
//! - [`mock::FixedAppearance`] - Preset appearance signal

pub mod appearance;
pub mod file_store;
pub mod mock;
pub mod session_store;
pub mod viewport;

pub use appearance::EnvAppearance;
pub use file_store::FileStore;
pub use mock::{FixedAppearance, InMemoryStore, ManualObserver};
pub use session_store::SessionStore;
pub use viewport::ScrollViewport;
