//! Entrance animation progress.
//!
//! A section's items fade in and slide into place once the section is
//! revealed. Item `n` starts `n * STAGGER` after the reveal. Progress is
//! derived from the reveal timestamp and the frame clock on every render;
//! nothing here is stored.

use std::time::Duration;

use crate::engine::RevealHandle;

/// Length of one item's entrance.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(800);

/// Delay between consecutive items.
pub const STAGGER: Duration = Duration::from_millis(100);

/// Columns an entering item travels.
pub const SLIDE_COLUMNS: u16 = 6;

/// Latest moment any entrance can still be running after its reveal.
pub const ANIMATION_WINDOW: Duration = Duration::from_millis(3500);

/// Reveal snapshot read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub revealed: bool,
    /// Start of the entrance; `None` shows content without animating
    pub revealed_at: Option<Duration>,
}

impl Reveal {
    /// Visible with no entrance.
    pub const SHOWN: Reveal = Reveal {
        revealed: true,
        revealed_at: None,
    };

    /// Not yet revealed.
    pub const HIDDEN: Reveal = Reveal {
        revealed: false,
        revealed_at: None,
    };

    pub fn from_handle(handle: &RevealHandle) -> Self {
        Self {
            revealed: handle.is_revealed(),
            revealed_at: handle.revealed_at(),
        }
    }

    /// Content animating in from mount time `at`.
    pub fn mounted_at(at: Duration) -> Self {
        Self {
            revealed: true,
            revealed_at: Some(at),
        }
    }

    /// Entrance of the item starting `delay` after the reveal.
    pub fn entrance(&self, now: Duration, delay: Duration) -> Entrance {
        self.entrance_for(now, delay, ENTRANCE_DURATION)
    }

    /// Like [`Reveal::entrance`] with a custom duration.
    pub fn entrance_for(&self, now: Duration, delay: Duration, duration: Duration) -> Entrance {
        if !self.revealed {
            return Entrance::Hidden;
        }
        let Some(at) = self.revealed_at else {
            return Entrance::Shown;
        };
        let start = at + delay;
        if now < start {
            return Entrance::Hidden;
        }
        let elapsed = now - start;
        if elapsed >= duration || duration.as_millis() == 0 {
            Entrance::Shown
        } else {
            Entrance::Entering(elapsed.as_millis() as f32 / duration.as_millis() as f32)
        }
    }

    /// Whether some entrance may still be running at `now`.
    pub fn is_animating(&self, now: Duration) -> bool {
        match self.revealed_at {
            Some(at) if self.revealed => now < at + ANIMATION_WINDOW,
            _ => false,
        }
    }
}

/// Where an item is in its entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    Hidden,
    /// Linear progress in `[0, 1)`
    Entering(f32),
    Shown,
}

impl Entrance {
    /// Eased progress (cubic ease-out) in `[0, 1]`.
    pub fn progress(self) -> f32 {
        match self {
            Entrance::Hidden => 0.0,
            Entrance::Entering(t) => 1.0 - (1.0 - t).powi(3),
            Entrance::Shown => 1.0,
        }
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, Entrance::Hidden)
    }

    /// Remaining slide distance in columns.
    pub fn slide(self) -> u16 {
        ((1.0 - self.progress()) * f32::from(SLIDE_COLUMNS)).round() as u16
    }
}

/// Delay of item `index` in a staggered list.
pub fn stagger(index: usize) -> Duration {
    STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
}
