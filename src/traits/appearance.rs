//! System appearance signal trait abstraction.

use crate::engine::ThemeMode;

/// Trait for reading the host's preferred color scheme.
///
/// The theme store samples this once during `init`; it is never polled.
pub trait SystemAppearance {
    /// The host's current preference, or `None` when it expresses none.
    fn preferred_mode(&self) -> Option<ThemeMode>;
}

impl<F> SystemAppearance for F
where
    F: Fn() -> Option<ThemeMode>,
{
    fn preferred_mode(&self) -> Option<ThemeMode> {
        self()
    }
}
