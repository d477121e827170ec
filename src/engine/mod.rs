//! Interaction and animation state engine.
//!
//! Four independent state components decide what the portfolio currently
//! displays. None of them render anything; views read their query methods
//! and recompute output on every frame.
//!
//! - [`ViewportRevealTracker`] - one-shot "revealed" latch per section
//! - [`TypewriterEngine`] - timed, cancellable text reveal
//! - [`ThemePreferenceStore`] - persisted light/dark preference
//! - [`HoverInteractionState`] - the single hovered item
//!
//! Supporting pieces: [`TimerQueue`] (the timer facility with RAII leases)
//! and [`CaretBlink`] (caret blink for the typewriter caption).

pub mod caret;
pub mod hover;
pub mod reveal;
pub mod theme;
pub mod timer;
pub mod typewriter;

pub use caret::CaretBlink;
pub use hover::HoverInteractionState;
pub use reveal::{RevealChange, RevealHandle, RevealState, ViewportRevealTracker};
pub use theme::{ThemeMode, ThemePreferenceStore, ThemeSource, ThemeState, THEME_STORAGE_KEY};
pub use timer::{TimerId, TimerLease, TimerQueue};
pub use typewriter::TypewriterEngine;
