//! Typewriter text effect.
//!
//! Reveals a fixed string one character per tick. A run holds a single
//! [`TimerLease`] while it is typing; finishing, cancelling or restarting
//! drops the lease, so no tick from an old run can touch the new state.
//!
//! # Example
//!
//! ```
//! use folio::engine::{TimerQueue, TypewriterEngine};
//! use std::time::Duration;
//!
//! let timers = TimerQueue::new();
//! let mut typewriter = TypewriterEngine::new();
//! typewriter.start(&timers, "Hi", 100).unwrap();
//!
//! for id in timers.advance(Duration::from_millis(200)) {
//!     typewriter.on_timer(id);
//! }
//! assert_eq!(typewriter.revealed_text(), "Hi");
//! assert!(!typewriter.is_running());
//! ```

use std::time::Duration;

use tracing::debug;

use super::timer::{TimerId, TimerLease, TimerQueue};
use crate::error::{EngineError, EngineResult};

/// Timed, cancellable text reveal.
#[derive(Debug, Default)]
pub struct TypewriterEngine {
    full_text: String,
    /// Length of `full_text` in chars
    char_count: usize,
    /// Number of chars currently revealed
    revealed_len: usize,
    tick_interval: Duration,
    lease: Option<TimerLease>,
}

impl TypewriterEngine {
    /// Create an idle engine with nothing to reveal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh run revealing `full_text` every `tick_interval_ms`.
    ///
    /// Any run in progress is cancelled first. Empty text completes at once
    /// without scheduling a timer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `tick_interval_ms` is zero. The current
    /// run is left untouched in that case.
    pub fn start(
        &mut self,
        timers: &TimerQueue,
        full_text: impl Into<String>,
        tick_interval_ms: u64,
    ) -> EngineResult<()> {
        if tick_interval_ms == 0 {
            return Err(EngineError::invalid_argument(
                "typewriter tick interval must be positive",
            ));
        }

        self.cancel();

        let full_text = full_text.into();
        self.char_count = full_text.chars().count();
        self.full_text = full_text;
        self.revealed_len = 0;
        self.tick_interval = Duration::from_millis(tick_interval_ms);

        if self.char_count > 0 {
            self.lease = Some(timers.schedule(self.tick_interval)?);
        }

        debug!(
            chars = self.char_count,
            interval_ms = tick_interval_ms,
            "Typewriter: started"
        );
        Ok(())
    }

    /// Reveal one more character.
    ///
    /// Returns the new prefix, or `None` when the run is finished or
    /// cancelled (the tick is a no-op).
    pub fn tick(&mut self) -> Option<&str> {
        self.lease.as_ref()?;

        if self.revealed_len < self.char_count {
            self.revealed_len += 1;
        }
        if self.revealed_len == self.char_count {
            self.lease = None;
            debug!(chars = self.char_count, "Typewriter: complete");
        }
        Some(self.revealed_text())
    }

    /// Handle a timer fire from the queue.
    ///
    /// Fires that do not belong to the current run are ignored.
    pub fn on_timer(&mut self, id: TimerId) -> Option<&str> {
        if self.owns_timer(id) {
            self.tick()
        } else {
            None
        }
    }

    /// Whether `id` is the timer of the current run.
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.lease.as_ref().is_some_and(|lease| lease.id() == id)
    }

    /// Halt the current run, freezing the revealed prefix.
    pub fn cancel(&mut self) {
        if self.lease.take().is_some() {
            debug!(
                revealed = self.revealed_len,
                chars = self.char_count,
                "Typewriter: cancelled"
            );
        }
    }

    /// The currently revealed prefix.
    pub fn revealed_text(&self) -> &str {
        let end = self
            .full_text
            .char_indices()
            .nth(self.revealed_len)
            .map(|(index, _)| index)
            .unwrap_or(self.full_text.len());
        &self.full_text[..end]
    }

    /// Number of characters revealed so far.
    pub fn revealed_len(&self) -> usize {
        self.revealed_len
    }

    /// The text this run is revealing.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Interval between reveals for the current run.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Whether a timer is still scheduled for this run.
    pub fn is_running(&self) -> bool {
        self.lease.is_some()
    }

    /// Whether every character has been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed_len == self.char_count
    }
}
