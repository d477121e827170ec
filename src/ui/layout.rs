//! Responsive page layout.
//!
//! `LayoutContext` turns the terminal size into the fixed screen regions
//! (header, scrolled body, key hints) and the sizing decisions the section
//! builders share. Nothing here depends on engine state, so section heights
//! stay stable while animations run.

use ratatui::layout::Rect;

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Below this width the header drops the nav labels
    pub const NAV_WIDTH: u16 = 64;
    /// Skill cards sit two abreast from this content width
    pub const TWO_COLUMN_WIDTH: u16 = 50;
    /// Skill cards sit four abreast from this content width
    pub const FOUR_COLUMN_WIDTH: u16 = 100;
}

/// Rows used by the fixed header (nav row plus rule).
pub const HEADER_HEIGHT: u16 = 2;

/// Rows used by the key hint bar.
pub const HINTS_HEIGHT: u16 = 1;

/// Widest the content column gets.
pub const MAX_CONTENT_WIDTH: u16 = 110;

/// Columns kept free on each side of the content column.
pub const SIDE_PADDING: u16 = 2;

/// The hero fills the viewport but never gets shorter than this.
pub const MIN_HERO_HEIGHT: u16 = 16;

/// Gap between skill cards in a row.
pub const CARD_GAP: u16 = 2;

/// Layout context holding terminal dimensions.
///
/// # Example
///
/// ```
/// use folio::ui::layout::LayoutContext;
///
/// let ctx = LayoutContext::new(120, 40);
/// assert_eq!(ctx.body().height, 37);
/// assert_eq!(ctx.skill_columns(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Fixed header region.
    pub fn header(&self) -> Rect {
        Rect::new(0, 0, self.width, HEADER_HEIGHT.min(self.height))
    }

    /// Scrolled document region.
    pub fn body(&self) -> Rect {
        let top = HEADER_HEIGHT.min(self.height);
        let height = self.height.saturating_sub(HEADER_HEIGHT + HINTS_HEIGHT);
        Rect::new(0, top, self.width, height)
    }

    /// Key hint region.
    pub fn hints(&self) -> Rect {
        let body = self.body();
        let y = body.y + body.height;
        Rect::new(0, y, self.width, self.height.saturating_sub(y).min(HINTS_HEIGHT))
    }

    /// Rows of the document visible at once.
    pub fn viewport_height(&self) -> u16 {
        self.body().height
    }

    /// Width of the centered content column.
    pub fn content_width(&self) -> u16 {
        self.width
            .saturating_sub(SIDE_PADDING * 2)
            .min(MAX_CONTENT_WIDTH)
            .max(1)
    }

    /// Left margin of the content column.
    pub fn margin(&self) -> u16 {
        self.width.saturating_sub(self.content_width()) / 2
    }

    /// Whether the header has room for nav labels.
    pub fn shows_nav(&self) -> bool {
        self.width >= breakpoints::NAV_WIDTH
    }

    /// Skill cards per row: 1, 2 or 4.
    pub fn skill_columns(&self) -> u16 {
        let content = self.content_width();
        if content >= breakpoints::FOUR_COLUMN_WIDTH {
            4
        } else if content >= breakpoints::TWO_COLUMN_WIDTH {
            2
        } else {
            1
        }
    }

    /// Width of one skill card.
    pub fn skill_card_width(&self) -> u16 {
        let columns = self.skill_columns();
        let gaps = CARD_GAP * (columns - 1);
        (self.content_width().saturating_sub(gaps) / columns).max(12)
    }

    /// Width of a project card.
    pub fn project_card_width(&self) -> u16 {
        self.content_width().min(84)
    }

    /// Width for prose paragraphs.
    pub fn prose_width(&self) -> u16 {
        self.content_width().min(72)
    }

    /// Height of the hero section.
    pub fn hero_height(&self) -> u16 {
        self.viewport_height().max(MIN_HERO_HEIGHT)
    }
}
