//! Single-item hover tracking.
//!
//! Pointer events can arrive out of order when the pointer sweeps quickly
//! across adjacent items: the `enter` for the new item may be delivered
//! before the `leave` for the old one. `enter` therefore always wins, and a
//! `leave` only clears the item it names.
//!
//! Amplification (tooltips, shine, particles) is never stored. Views ask
//! [`HoverInteractionState::is_amplified`] on every render.

use std::fmt::Debug;

use tracing::trace;

/// Which single item is hovered, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverInteractionState<K = String> {
    active_key: Option<K>,
}

impl<K> Default for HoverInteractionState<K> {
    fn default() -> Self {
        Self { active_key: None }
    }
}

impl<K> HoverInteractionState<K>
where
    K: Clone + PartialEq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `key` the active item, replacing any previous one.
    pub fn enter(&mut self, key: K) {
        trace!(?key, "Hover: enter");
        self.active_key = Some(key);
    }

    /// Clear the active item if it is `key`; otherwise do nothing.
    ///
    /// Returns `true` if the active item was cleared.
    pub fn leave(&mut self, key: &K) -> bool {
        if self.active_key.as_ref() == Some(key) {
            trace!(?key, "Hover: leave");
            self.active_key = None;
            true
        } else {
            trace!(?key, "Hover: stale leave ignored");
            false
        }
    }

    /// Clear the active item unconditionally (view teardown).
    pub fn clear(&mut self) {
        self.active_key = None;
    }

    pub fn active_key(&self) -> Option<&K> {
        self.active_key.as_ref()
    }

    /// Whether `key` should render amplified.
    pub fn is_amplified(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }
}
