//! Color palettes for the light and dark modes.
//!
//! Every color is an RGB value so entrance fades can blend toward the page
//! background.

use ratatui::style::Color;

use crate::engine::ThemeMode;

/// Colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Alternate section background (about, summary box)
    pub surface: Color,
    /// Card background
    pub card: Color,
    /// Headings and body text
    pub text: Color,
    /// Secondary text
    pub muted: Color,
    /// Links, active nav item
    pub accent: Color,
    /// Second gradient stop of headings and bars
    pub accent_alt: Color,
    /// Card borders and rules
    pub border: Color,
    /// Empty part of progress bars
    pub track: Color,
    /// Technology chip background
    pub chip: Color,
    /// "Featured" badge
    pub badge: Color,
    /// Tooltip fill
    pub tooltip_bg: Color,
    /// Tooltip text
    pub tooltip_fg: Color,
    /// Footer heart
    pub heart: Color,
    /// Star on the stats row
    pub star: Color,
    /// Trend arrow on the stats row
    pub trend: Color,
    /// Hero and footer background (dark in both modes)
    pub hero_bg: Color,
    /// Hero headline
    pub hero_fg: Color,
    /// Typewriter caption
    pub hero_caption: Color,
    /// Hero tagline and footer text
    pub hero_muted: Color,
}

/// Light palette (Tailwind gray/slate scale).
pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    surface: Color::Rgb(249, 250, 251),
    card: Color::Rgb(243, 244, 246),
    text: Color::Rgb(17, 24, 39),
    muted: Color::Rgb(75, 85, 99),
    accent: Color::Rgb(37, 99, 235),
    accent_alt: Color::Rgb(147, 51, 234),
    border: Color::Rgb(209, 213, 219),
    track: Color::Rgb(229, 231, 235),
    chip: Color::Rgb(219, 234, 254),
    badge: Color::Rgb(250, 204, 21),
    tooltip_bg: Color::Rgb(17, 24, 39),
    tooltip_fg: Color::Rgb(255, 255, 255),
    heart: Color::Rgb(239, 68, 68),
    star: Color::Rgb(234, 179, 8),
    trend: Color::Rgb(34, 197, 94),
    hero_bg: Color::Rgb(15, 23, 42),
    hero_fg: Color::Rgb(255, 255, 255),
    hero_caption: Color::Rgb(191, 219, 254),
    hero_muted: Color::Rgb(209, 213, 219),
};

/// Dark palette.
pub const DARK: Palette = Palette {
    background: Color::Rgb(15, 23, 42),
    surface: Color::Rgb(30, 41, 59),
    card: Color::Rgb(30, 41, 59),
    text: Color::Rgb(255, 255, 255),
    muted: Color::Rgb(209, 213, 219),
    accent: Color::Rgb(96, 165, 250),
    accent_alt: Color::Rgb(192, 132, 252),
    border: Color::Rgb(55, 65, 81),
    track: Color::Rgb(55, 65, 81),
    chip: Color::Rgb(30, 58, 138),
    badge: Color::Rgb(250, 204, 21),
    tooltip_bg: Color::Rgb(255, 255, 255),
    tooltip_fg: Color::Rgb(17, 24, 39),
    heart: Color::Rgb(239, 68, 68),
    star: Color::Rgb(234, 179, 8),
    trend: Color::Rgb(34, 197, 94),
    hero_bg: Color::Rgb(2, 6, 23),
    hero_fg: Color::Rgb(255, 255, 255),
    hero_caption: Color::Rgb(191, 219, 254),
    hero_muted: Color::Rgb(209, 213, 219),
};

impl Palette {
    /// Palette for `mode`.
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// Linear blend from `from` to `to` at `t` in `[0, 1]`.
///
/// Non-RGB colors are returned unchanged (`from` below the midpoint, `to`
/// above).
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// `color` drawn at `opacity` over `background`.
pub fn fade(color: Color, background: Color, opacity: f32) -> Color {
    blend(background, color, opacity)
}

/// Color at position `t` of a two-stop gradient.
pub fn gradient(stops: [(u8, u8, u8); 2], t: f32) -> Color {
    let [(r1, g1, b1), (r2, g2, b2)] = stops;
    blend(Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2), t)
}
