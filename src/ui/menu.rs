//! Navigation drawer for narrow terminals.
//!
//! The drawer drops down under the header when the menu button is clicked.
//! It lists every section plus the resume link, and while it slides only
//! the rows uncovered so far are drawn.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::document::{HitTarget, PageView};
use super::layout::LayoutContext;
use super::text;
use super::theme::fade;
use crate::content::SectionId;

/// Extra indent of the item under the pointer.
const HOVER_INDENT: u16 = 2;

const RESUME_LABEL: &str = "Resume";

/// Drawer rows and their click targets in screen coordinates.
#[derive(Debug, Clone)]
pub struct Menu {
    pub lines: Vec<Line<'static>>,
    pub targets: Vec<(Rect, HitTarget)>,
}

/// Rows of a fully open drawer: the sections, the resume link and a rule.
pub fn menu_height() -> u16 {
    SectionId::ALL.len() as u16 + 2
}

/// Screen area the open drawer covers inside `body`.
pub fn menu_area(body: Rect) -> Rect {
    Rect::new(body.x, body.y, body.width, menu_height().min(body.height))
}

/// Rows of `area` uncovered at `openness`.
pub fn visible_rows(area: Rect, openness: f32) -> u16 {
    let rows = (f32::from(area.height) * openness.clamp(0.0, 1.0)).ceil() as u16;
    rows.min(area.height)
}

/// Build the drawer for `area`.
pub fn build_menu(area: Rect, view: &PageView<'_>, hovered: Option<HitTarget>) -> Menu {
    let ctx = LayoutContext::new(area.width, area.height);
    let palette = view.palette();
    let base = Style::default().bg(palette.surface);
    let opacity = view.menu.openness.clamp(0.0, 1.0);
    let margin = ctx.margin();
    let inner = ctx.content_width();

    let mut lines = Vec::new();
    let mut targets = Vec::new();
    for (row, section) in SectionId::ALL.into_iter().enumerate() {
        let target = HitTarget::MenuItem(section);
        let (indent, style) = if hovered == Some(target) {
            (
                margin + HOVER_INDENT,
                base.fg(fade(palette.accent, palette.surface, opacity))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (margin, base.fg(fade(palette.text, palette.surface, opacity)))
        };
        lines.push(padded(
            vec![
                Span::styled(" ".repeat(usize::from(indent)), base),
                Span::styled(section.label(), style),
            ],
            area.width,
            base,
        ));
        targets.push((
            Rect::new(area.x + margin, area.y + row as u16, inner, 1),
            target,
        ));
    }

    lines.push(padded(
        vec![
            Span::styled(" ".repeat(usize::from(margin)), base),
            Span::styled(
                RESUME_LABEL,
                base.fg(fade(palette.accent_alt, palette.surface, opacity)),
            ),
        ],
        area.width,
        base,
    ));
    lines.push(Line::from(Span::styled(
        "─".repeat(usize::from(area.width)),
        base.fg(fade(palette.border, palette.surface, opacity)),
    )));

    lines.truncate(usize::from(area.height));
    let targets = targets
        .into_iter()
        .map(|(rect, target)| (rect.intersection(area), target))
        .filter(|(rect, _)| rect.width > 0 && rect.height > 0)
        .collect();

    Menu { lines, targets }
}

fn padded(mut spans: Vec<Span<'static>>, width: u16, style: Style) -> Line<'static> {
    let used: u16 = spans.iter().map(|s| text::width(&s.content)).sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(usize::from(width - used)), style));
    }
    Line::from(spans)
}
