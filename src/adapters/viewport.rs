//! Scroll viewport as an intersection observation facility.
//!
//! The document is a vertical stack of rows. Each observable element
//! occupies a row range; the viewport shows `height` rows starting at
//! `offset`. After any change to layout, scroll position or size the event
//! loop calls [`ScrollViewport::take_entries`], which reports every
//! observation whose threshold crossing state changed since the last report.
//! A new observation always gets one initial report, as browser observers
//! do.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;
use std::time::Duration;

use crate::traits::{IntersectionEntry, IntersectionObserver, ObservationError, ObservationId};

#[derive(Debug, Clone)]
struct Observed {
    element_id: String,
    threshold: f32,
    /// Crossing state at the last report; `None` before the first one
    last_visible: Option<bool>,
}

/// Row-based viewport over the rendered document.
#[derive(Debug, Clone)]
pub struct ScrollViewport {
    available: bool,
    next_id: u64,
    observations: BTreeMap<ObservationId, Observed>,
    layout: HashMap<String, Range<u16>>,
    offset: u16,
    height: u16,
    now: Duration,
}

impl Default for ScrollViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollViewport {
    /// Create a viewport with no layout and zero height.
    pub fn new() -> Self {
        Self {
            available: true,
            next_id: 0,
            observations: BTreeMap::new(),
            layout: HashMap::new(),
            offset: 0,
            height: 0,
            now: Duration::ZERO,
        }
    }

    /// Create a viewport that refuses to observe, for hosts where
    /// observation is switched off.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Replace the row range of `element_id`.
    pub fn set_element_rows(&mut self, element_id: impl Into<String>, rows: Range<u16>) {
        self.layout.insert(element_id.into(), rows);
    }

    /// Scroll so the first visible document row is `offset`.
    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset;
    }

    /// Set the number of visible rows.
    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    /// Set the clock reading stamped on new reports.
    pub fn set_time(&mut self, now: Duration) {
        self.now = now;
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Visible document rows.
    pub fn visible_rows(&self) -> Range<u16> {
        self.offset..self.offset.saturating_add(self.height)
    }

    /// Row range registered for `element_id`.
    pub fn element_rows(&self, element_id: &str) -> Option<Range<u16>> {
        self.layout.get(element_id).cloned()
    }

    /// Fraction of `element_id`'s rows inside the viewport.
    ///
    /// An element taller than the viewport is measured against the viewport
    /// height, so it reports 1.0 while it fills the screen. Unknown and
    /// zero-height elements report 0.
    pub fn ratio(&self, element_id: &str) -> f32 {
        let Some(rows) = self.layout.get(element_id) else {
            return 0.0;
        };
        let total = rows.end.saturating_sub(rows.start);
        let basis = total.min(self.height);
        if basis == 0 {
            return 0.0;
        }
        let visible = self.visible_rows();
        let start = rows.start.max(visible.start);
        let end = rows.end.min(visible.end);
        f32::from(end.saturating_sub(start)) / f32::from(basis)
    }

    /// Collect reports for observations whose crossing state changed.
    pub fn take_entries(&mut self) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        let ratios: Vec<(ObservationId, f32)> = self
            .observations
            .iter()
            .map(|(id, observed)| (*id, self.ratio(&observed.element_id)))
            .collect();

        for (id, ratio) in ratios {
            let Some(observed) = self.observations.get_mut(&id) else {
                continue;
            };
            let visible = ratio >= observed.threshold;
            if observed.last_visible == Some(visible) {
                continue;
            }
            observed.last_visible = Some(visible);
            entries.push(IntersectionEntry {
                observation: id,
                element_id: observed.element_id.clone(),
                ratio,
                time: self.now,
            });
        }
        entries
    }

    /// Number of live observations.
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }
}

impl IntersectionObserver for ScrollViewport {
    fn observe(
        &mut self,
        element_id: &str,
        threshold: f32,
    ) -> Result<ObservationId, ObservationError> {
        if !self.available {
            return Err(ObservationError::Unsupported);
        }
        if !self.layout.contains_key(element_id) {
            return Err(ObservationError::UnknownElement(element_id.to_string()));
        }

        self.next_id += 1;
        let id = ObservationId(self.next_id);
        self.observations.insert(
            id,
            Observed {
                element_id: element_id.to_string(),
                threshold,
                last_visible: None,
            },
        );
        Ok(id)
    }

    fn unobserve(&mut self, id: ObservationId) {
        self.observations.remove(&id);
    }
}
