//! Terminal appearance signal.
//!
//! Terminals have no standard "prefers color scheme" query. The signal is
//! read from, in order:
//!
//! 1. `FOLIO_APPEARANCE` (`light` or `dark`), an explicit override
//! 2. `COLORFGBG` (`fg;bg` or `fg;default;bg`), set by rxvt, Konsole, iTerm2
//!    and others; background palette entries 7 and 9-15 are light
//!
//! When neither is usable the host expresses no preference.

use crate::engine::ThemeMode;
use crate::traits::SystemAppearance;

/// Environment variable holding an explicit appearance override.
pub const APPEARANCE_ENV: &str = "FOLIO_APPEARANCE";

/// Environment variable describing terminal foreground/background colors.
pub const COLORFGBG_ENV: &str = "COLORFGBG";

/// Appearance signal sampled from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAppearance;

impl EnvAppearance {
    pub fn new() -> Self {
        Self
    }
}

impl SystemAppearance for EnvAppearance {
    fn preferred_mode(&self) -> Option<ThemeMode> {
        let explicit = std::env::var(APPEARANCE_ENV).ok();
        let colorfgbg = std::env::var(COLORFGBG_ENV).ok();
        resolve_appearance(explicit.as_deref(), colorfgbg.as_deref())
    }
}

/// Resolve the appearance from raw environment values.
pub fn resolve_appearance(explicit: Option<&str>, colorfgbg: Option<&str>) -> Option<ThemeMode> {
    if let Some(mode) = explicit.and_then(|value| value.parse().ok()) {
        return Some(mode);
    }
    colorfgbg.and_then(mode_from_colorfgbg)
}

/// Interpret a `COLORFGBG` value by its last (background) field.
pub fn mode_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        7 | 9..=15 => Some(ThemeMode::Light),
        0..=6 | 8 => Some(ThemeMode::Dark),
        _ => None,
    }
}
