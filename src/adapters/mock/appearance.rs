//! Fixed system appearance for testing.

use std::cell::Cell;
use std::rc::Rc;

use crate::engine::ThemeMode;
use crate::traits::SystemAppearance;

/// Appearance signal returning a preset value and counting reads.
#[derive(Debug, Clone, Default)]
pub struct FixedAppearance {
    mode: Option<ThemeMode>,
    reads: Rc<Cell<usize>>,
}

impl FixedAppearance {
    pub fn new(mode: Option<ThemeMode>) -> Self {
        Self {
            mode,
            reads: Rc::new(Cell::new(0)),
        }
    }

    pub fn dark() -> Self {
        Self::new(Some(ThemeMode::Dark))
    }

    pub fn light() -> Self {
        Self::new(Some(ThemeMode::Light))
    }

    /// How many times the signal has been sampled (shared across clones).
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl SystemAppearance for FixedAppearance {
    fn preferred_mode(&self) -> Option<ThemeMode> {
        self.reads.set(self.reads.get() + 1);
        self.mode
    }
}
