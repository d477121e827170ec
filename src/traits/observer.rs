//! Intersection observation trait abstraction.
//!
//! A host facility that watches elements and reports what fraction of each
//! one intersects the viewport. Reports are delivered as
//! [`IntersectionEntry`] records through whatever event path the host uses;
//! the engine never polls.

use std::time::Duration;

use thiserror::Error;

/// Observation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObservationError {
    /// The host has no observation facility
    #[error("intersection observation is not supported by this host")]
    Unsupported,
    /// The element is not known to the host layout
    #[error("unknown element: {0}")]
    UnknownElement(String),
}

/// Identifier of one active observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(pub u64);

/// A single visibility report.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Observation that produced this report
    pub observation: ObservationId,
    /// Element the report is about
    pub element_id: String,
    /// Fraction of the element's area inside the viewport, in [0, 1]
    pub ratio: f32,
    /// Host clock reading when the change was observed
    pub time: Duration,
}

impl IntersectionEntry {
    /// Whether this report meets `threshold`.
    pub fn meets(&self, threshold: f32) -> bool {
        self.ratio >= threshold
    }
}

/// Trait for hosts that can observe element visibility.
///
/// Implementations must eventually report every element that becomes
/// visible, and must stop reporting an observation once
/// [`IntersectionObserver::unobserve`] has been called for it.
pub trait IntersectionObserver {
    /// Start observing `element_id`, reporting crossings of `threshold`.
    fn observe(
        &mut self,
        element_id: &str,
        threshold: f32,
    ) -> Result<ObservationId, ObservationError>;

    /// Stop an observation and release its resources. Unknown ids are ignored.
    fn unobserve(&mut self, id: ObservationId);
}
