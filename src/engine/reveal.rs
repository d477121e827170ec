//! Viewport-triggered reveal tracking.
//!
//! Each observed element carries a one-shot [`RevealState`] latch. The
//! tracker turns raw [`IntersectionEntry`] reports into at most one
//! [`RevealChange`] per visibility transition and publishes the result
//! through a cheap [`RevealHandle`] owned by the section view.
//!
//! # Modes
//!
//! - `trigger_once = true`: the first upward crossing latches the element as
//!   revealed. The observation is released right away and later reports are
//!   ignored.
//! - `trigger_once = false`: upward and downward crossings both notify.
//!   Re-entering the viewport replays the full entrance animation (the
//!   reveal timestamp moves to the new crossing), while `has_triggered`
//!   stays latched as history.
//!
//! If the host cannot observe at all the element is treated as revealed
//! immediately, so content is never left hidden.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::traits::{IntersectionEntry, IntersectionObserver, ObservationId};

/// One-shot reveal latch for an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    pub element_id: String,
    /// Latched true on the first upward crossing, never reset
    pub has_triggered: bool,
}

/// A visibility transition delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealChange {
    pub element_id: String,
    pub revealed: bool,
}

/// Read side of an observed element, owned by the section view.
#[derive(Debug, Clone)]
pub struct RevealHandle {
    element_id: String,
    revealed: Rc<Cell<bool>>,
    revealed_at: Rc<Cell<Option<Duration>>>,
}

impl RevealHandle {
    /// Element this handle reports on.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Whether the element currently counts as revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    /// Host time of the crossing that revealed the element.
    ///
    /// `None` while hidden, and also when the element was revealed without
    /// an observation (fail-open), in which case no entrance plays.
    pub fn revealed_at(&self) -> Option<Duration> {
        self.revealed_at.get()
    }
}

struct Tracked {
    state: RevealState,
    threshold: f32,
    trigger_once: bool,
    observation: Option<ObservationId>,
    revealed: Rc<Cell<bool>>,
    revealed_at: Rc<Cell<Option<Duration>>>,
}

type RevealListener = Box<dyn FnMut(&RevealChange)>;

/// Tracks reveal latches for every observed element.
#[derive(Default)]
pub struct ViewportRevealTracker {
    tracked: HashMap<String, Tracked>,
    listeners: Vec<RevealListener>,
}

impl fmt::Debug for ViewportRevealTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportRevealTracker")
            .field("tracked", &self.tracked.keys().collect::<Vec<_>>())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ViewportRevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `element_id`.
    ///
    /// Observing an element that is already tracked replaces the previous
    /// observation and starts a new latch.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `threshold` is in `(0, 1]`.
    pub fn observe(
        &mut self,
        observer: &mut dyn IntersectionObserver,
        element_id: &str,
        threshold: f32,
        trigger_once: bool,
    ) -> EngineResult<RevealHandle> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(EngineError::invalid_argument(format!(
                "reveal threshold must be in (0, 1], got {}",
                threshold
            )));
        }

        self.unobserve(observer, element_id);

        let revealed = Rc::new(Cell::new(false));
        let revealed_at = Rc::new(Cell::new(None));
        let mut tracked = Tracked {
            state: RevealState {
                element_id: element_id.to_string(),
                has_triggered: false,
            },
            threshold,
            trigger_once,
            observation: None,
            revealed: Rc::clone(&revealed),
            revealed_at: Rc::clone(&revealed_at),
        };

        match observer.observe(element_id, threshold) {
            Ok(id) => {
                debug!(element = element_id, threshold, trigger_once, "Reveal: observing");
                tracked.observation = Some(id);
            }
            Err(err) => {
                let err = EngineError::from(err);
                warn!(
                    code = err.error_code(),
                    element = element_id,
                    "{}; revealing immediately",
                    err
                );
                tracked.state.has_triggered = true;
                tracked.revealed.set(true);
            }
        }

        self.tracked.insert(element_id.to_string(), tracked);
        Ok(RevealHandle {
            element_id: element_id.to_string(),
            revealed,
            revealed_at,
        })
    }

    /// Apply one report from the observation facility.
    ///
    /// Returns the change that was published, if any. Reports for unknown
    /// elements or superseded observations are ignored.
    pub fn on_intersection(
        &mut self,
        observer: &mut dyn IntersectionObserver,
        entry: &IntersectionEntry,
    ) -> Option<RevealChange> {
        let tracked = self.tracked.get_mut(&entry.element_id)?;
        if tracked.observation != Some(entry.observation) {
            return None;
        }

        let visible = entry.meets(tracked.threshold);
        if visible == tracked.revealed.get() {
            return None;
        }

        if visible {
            tracked.state.has_triggered = true;
            tracked.revealed_at.set(Some(entry.time));
        } else {
            tracked.revealed_at.set(None);
        }
        tracked.revealed.set(visible);

        if visible && tracked.trigger_once {
            if let Some(id) = tracked.observation.take() {
                observer.unobserve(id);
            }
        }

        let change = RevealChange {
            element_id: entry.element_id.clone(),
            revealed: visible,
        };
        debug!(
            element = %change.element_id,
            revealed = change.revealed,
            ratio = entry.ratio,
            "Reveal: transition"
        );
        for listener in &mut self.listeners {
            listener(&change);
        }
        Some(change)
    }

    /// Stop tracking `element_id` and release its observation.
    ///
    /// Returns `true` if the element was tracked.
    pub fn unobserve(&mut self, observer: &mut dyn IntersectionObserver, element_id: &str) -> bool {
        match self.tracked.remove(element_id) {
            Some(mut tracked) => {
                if let Some(id) = tracked.observation.take() {
                    observer.unobserve(id);
                }
                debug!(element = element_id, "Reveal: released");
                true
            }
            None => false,
        }
    }

    /// Release every observation.
    pub fn teardown(&mut self, observer: &mut dyn IntersectionObserver) {
        let ids: Vec<String> = self.tracked.keys().cloned().collect();
        for id in ids {
            self.unobserve(observer, &id);
        }
    }

    /// Register a callback for every published change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&RevealChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Latch state for `element_id`, if tracked.
    pub fn state(&self, element_id: &str) -> Option<&RevealState> {
        self.tracked.get(element_id).map(|tracked| &tracked.state)
    }

    /// Whether `element_id` is tracked and currently revealed.
    pub fn is_revealed(&self, element_id: &str) -> bool {
        self.tracked
            .get(element_id)
            .is_some_and(|tracked| tracked.revealed.get())
    }

    /// Whether the facility is still observing `element_id`.
    pub fn is_observing(&self, element_id: &str) -> bool {
        self.tracked
            .get(element_id)
            .is_some_and(|tracked| tracked.observation.is_some())
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}
