//! Caret blink state for the typewriter caption.
//!
//! The caret stays solid for a short wait after any typing activity, then
//! alternates visible/hidden every half cycle. Time is the event loop's
//! clock, so the state is fully deterministic under test.

use std::time::Duration;

/// Manages caret blink state with a wait-after-activity period.
///
/// Default timing:
/// - blink_wait: 500ms - caret stays visible after activity
/// - half_cycle: 400ms - duration of each visible/hidden phase (0.8s cycle)
#[derive(Debug, Clone)]
pub struct CaretBlink {
    /// Clock reading of the last typing activity
    last_activity: Duration,
    /// Current visibility state of the caret
    is_visible: bool,
    blink_wait: Duration,
    half_cycle: Duration,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new()
    }
}

impl CaretBlink {
    /// Create a caret with default timing.
    pub fn new() -> Self {
        Self::with_timing(Duration::from_millis(500), Duration::from_millis(400))
    }

    /// Create a caret with custom timing. A zero half cycle never blinks.
    pub fn with_timing(blink_wait: Duration, half_cycle: Duration) -> Self {
        Self {
            last_activity: Duration::ZERO,
            is_visible: true,
            blink_wait,
            half_cycle,
        }
    }

    /// Record typing activity at `now`; the caret becomes solid again.
    pub fn reset(&mut self, now: Duration) {
        self.last_activity = now;
        self.is_visible = true;
    }

    /// Update the blink state for clock reading `now`.
    ///
    /// Returns `true` if the visibility changed and a redraw is needed.
    pub fn update(&mut self, now: Duration) -> bool {
        let since_activity = now.saturating_sub(self.last_activity);

        let visible = if since_activity < self.blink_wait || self.half_cycle.is_zero() {
            true
        } else {
            let into_blink = (since_activity - self.blink_wait).as_millis();
            let half = self.half_cycle.as_millis();
            (into_blink % (half * 2)) < half
        };

        let changed = self.is_visible != visible;
        self.is_visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_new_creates_visible_caret() {
        assert!(CaretBlink::new().is_visible());
    }

    #[test]
    fn test_caret_stays_visible_during_wait() {
        let mut caret = CaretBlink::new();
        caret.reset(ms(0));
        for t in (0..500).step_by(16) {
            caret.update(ms(t));
            assert!(caret.is_visible(), "caret hidden at {}ms during wait", t);
        }
    }

    #[test]
    fn test_caret_blinks_after_wait() {
        let mut caret = CaretBlink::new();
        caret.reset(ms(0));

        assert!(!caret.update(ms(600)));
        assert!(caret.is_visible());

        assert!(caret.update(ms(900)));
        assert!(!caret.is_visible());

        assert!(caret.update(ms(1300)));
        assert!(caret.is_visible());
    }

    #[test]
    fn test_reset_makes_caret_visible() {
        let mut caret = CaretBlink::new();
        caret.update(ms(950));
        assert!(!caret.is_visible());

        caret.reset(ms(950));
        assert!(caret.is_visible());
        caret.update(ms(1000));
        assert!(caret.is_visible());
    }

    #[test]
    fn test_zero_half_cycle_stays_solid() {
        let mut caret = CaretBlink::with_timing(ms(0), ms(0));
        for t in [0, 100, 10_000] {
            caret.update(ms(t));
            assert!(caret.is_visible());
        }
    }
}
