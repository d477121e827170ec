//! Manually driven intersection observer for testing.
//!
//! Records every observe/unobserve call. Tests build
//! [`IntersectionEntry`] values themselves and feed them to the tracker.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::traits::{IntersectionEntry, IntersectionObserver, ObservationError, ObservationId};

/// Intersection observer double.
#[derive(Debug, Clone, Default)]
pub struct ManualObserver {
    available: bool,
    next_id: u64,
    active: BTreeMap<ObservationId, (String, f32)>,
    released: Vec<ObservationId>,
}

impl ManualObserver {
    /// Create an observer that accepts every observation.
    pub fn new() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    /// Create an observer that rejects every observation as unsupported.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Most recent active observation of `element_id`.
    pub fn id_for(&self, element_id: &str) -> Option<ObservationId> {
        self.active
            .iter()
            .rev()
            .find(|(_, (element, _))| element == element_id)
            .map(|(id, _)| *id)
    }

    /// Threshold registered for `element_id`.
    pub fn threshold_for(&self, element_id: &str) -> Option<f32> {
        let id = self.id_for(element_id)?;
        self.active.get(&id).map(|(_, threshold)| *threshold)
    }

    /// Number of live observations.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Observations released so far, in order.
    pub fn released(&self) -> &[ObservationId] {
        &self.released
    }

    /// Build a report for the active observation of `element_id`.
    pub fn entry(&self, element_id: &str, ratio: f32, time: Duration) -> Option<IntersectionEntry> {
        Some(IntersectionEntry {
            observation: self.id_for(element_id)?,
            element_id: element_id.to_string(),
            ratio,
            time,
        })
    }
}

impl IntersectionObserver for ManualObserver {
    fn observe(
        &mut self,
        element_id: &str,
        threshold: f32,
    ) -> Result<ObservationId, ObservationError> {
        if !self.available {
            return Err(ObservationError::Unsupported);
        }
        self.next_id += 1;
        let id = ObservationId(self.next_id);
        self.active.insert(id, (element_id.to_string(), threshold));
        Ok(id)
    }

    fn unobserve(&mut self, id: ObservationId) {
        if self.active.remove(&id).is_some() {
            self.released.push(id);
        }
    }
}
