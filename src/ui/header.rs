//! Fixed header and the key hint bar.
//!
//! Wide terminals get the logo, section nav and theme toggle. Narrow ones
//! swap the nav for a menu button that opens the section drawer.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::document::{HitTarget, PageView};
use super::layout::LayoutContext;
use super::text;
use super::theme::blend;
use crate::content::{Portfolio, SectionId};
use crate::engine::{ThemeMode, ThemeSource};

/// Gap between nav labels.
const NAV_GAP: u16 = 3;

/// Rendered header rows and their click targets in screen coordinates.
#[derive(Debug, Clone)]
pub struct Header {
    pub lines: Vec<Line<'static>>,
    pub targets: Vec<(Rect, HitTarget)>,
}

/// Build the header for `area`.
///
/// `active` is the section at the top of the viewport, `hovered` the target
/// under the pointer.
pub fn build_header(
    area: Rect,
    portfolio: &Portfolio,
    view: &PageView<'_>,
    active: Option<SectionId>,
    hovered: Option<HitTarget>,
) -> Header {
    let ctx = LayoutContext::new(area.width, area.height);
    let palette = view.palette();
    let base = Style::default().bg(palette.background);

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut targets = Vec::new();
    let margin = ctx.margin();
    let mut column = margin;
    spans.push(Span::styled(" ".repeat(usize::from(margin)), base));

    for (index, letter) in portfolio.initials.chars().enumerate() {
        let t = if index == 0 { 0.0 } else { 1.0 };
        spans.push(Span::styled(
            letter.to_string(),
            base.fg(blend(palette.accent, palette.accent_alt, t))
                .add_modifier(Modifier::BOLD),
        ));
    }
    column += text::width(portfolio.initials);

    let toggle = toggle_label(view.mode);
    let toggle_width = text::width(toggle);
    let right_edge = margin + ctx.content_width();
    let menu_button = (!ctx.shows_nav()).then(|| menu_label(view.menu.open));
    let menu_width = menu_button.map_or(0, |label| text::width(label) + 1);
    let toggle_column = right_edge.saturating_sub(toggle_width + menu_width);

    if ctx.shows_nav() {
        let nav_width: u16 = SectionId::ALL
            .iter()
            .map(|section| text::width(section.label()) + NAV_GAP)
            .sum();
        let nav_start = toggle_column.saturating_sub(nav_width).max(column + NAV_GAP);
        spans.push(Span::styled(
            " ".repeat(usize::from(nav_start - column)),
            base,
        ));
        column = nav_start;

        for section in SectionId::ALL {
            let label = section.label();
            let width = text::width(label);
            let target = HitTarget::Jump(section);
            let style = if active == Some(section) {
                base.fg(palette.accent).add_modifier(Modifier::BOLD)
            } else if hovered == Some(target) {
                base.fg(palette.accent)
            } else {
                base.fg(palette.muted)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::styled(" ".repeat(usize::from(NAV_GAP)), base));
            targets.push((Rect::new(area.x + column, area.y, width, 1), target));
            column += width + NAV_GAP;
        }
    }

    if toggle_column > column {
        spans.push(Span::styled(
            " ".repeat(usize::from(toggle_column - column)),
            base,
        ));
        column = toggle_column;
    }
    let toggle_style = if hovered == Some(HitTarget::ToggleTheme) {
        base.fg(palette.accent).bg(palette.chip)
    } else {
        base.fg(palette.text).bg(palette.card)
    };
    spans.push(Span::styled(toggle, toggle_style));
    targets.push((
        Rect::new(area.x + column, area.y, toggle_width, 1),
        HitTarget::ToggleTheme,
    ));
    column += toggle_width;

    if let Some(label) = menu_button {
        spans.push(Span::styled(" ", base));
        column += 1;
        let width = text::width(label);
        let style = if hovered == Some(HitTarget::ToggleMenu) || view.menu.open {
            base.fg(palette.accent).bg(palette.chip)
        } else {
            base.fg(palette.text).bg(palette.card)
        };
        spans.push(Span::styled(label, style));
        targets.push((
            Rect::new(area.x + column, area.y, width, 1),
            HitTarget::ToggleMenu,
        ));
        column += width;
    }

    if column < area.width {
        spans.push(Span::styled(
            " ".repeat(usize::from(area.width - column)),
            base,
        ));
    }

    let rule = Line::from(Span::styled(
        "─".repeat(usize::from(area.width)),
        base.fg(palette.border),
    ));

    let targets = targets
        .into_iter()
        .map(|(rect, target)| (rect.intersection(area), target))
        .filter(|(rect, _)| rect.width > 0 && rect.height > 0)
        .collect();

    Header {
        lines: vec![Line::from(spans), rule],
        targets,
    }
}

/// The toggle shows the mode it switches to.
fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "[ ☀ ]",
        ThemeMode::Light => "[ ☾ ]",
    }
}

fn menu_label(open: bool) -> &'static str {
    if open {
        "[ × ]"
    } else {
        "[ ≡ ]"
    }
}

/// Build responsive key hints.
///
/// Narrow terminals get abbreviated hints, and trailing hints are dropped
/// until the theme status fits.
pub fn build_hints(ctx: &LayoutContext, view: &PageView<'_>) -> Line<'static> {
    let palette = view.palette();
    let base = Style::default().bg(palette.surface).fg(palette.muted);
    let key = base.fg(palette.accent);
    let narrow = !ctx.shows_nav();

    let mut hints: Vec<(&'static str, &'static str, &'static str)> = vec![
        ("j/k", " scroll", ""),
        ("1-5", " jump", ""),
        ("t", " theme", ""),
        ("r", " system theme", " system"),
        ("c", " retype", ""),
        ("q", " quit", ""),
    ];
    if narrow {
        hints.insert(2, ("m", " menu", ""));
    }
    let status = theme_status(view.mode, view.source);
    let budget = ctx.width.saturating_sub(text::width(&status) + 4);

    let mut spans = vec![Span::styled(" ", base)];
    let mut used = 1;
    for (index, (keys, label, short)) in hints.iter().enumerate() {
        let label = if narrow && !short.is_empty() { short } else { label };
        let separator = if index > 0 { " │ " } else { "" };
        let width = text::width(separator) + text::width(keys) + text::width(label);
        if used + width > budget {
            break;
        }
        if index > 0 {
            spans.push(Span::styled(separator, base));
        }
        spans.push(Span::styled(*keys, key));
        spans.push(Span::styled(*label, base));
        used += width;
    }

    spans.push(Span::styled("   ", base));
    spans.push(Span::styled(status, base.fg(palette.text)));

    let used: u16 = spans.iter().map(|s| text::width(&s.content)).sum();
    if used < ctx.width {
        spans.push(Span::styled(" ".repeat(usize::from(ctx.width - used)), base));
    }
    Line::from(spans)
}

fn theme_status(mode: ThemeMode, source: ThemeSource) -> String {
    let mode = match mode {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
    };
    let source = match source {
        ThemeSource::UserOverride => "saved",
        ThemeSource::SystemDefault => "system",
    };
    format!("theme: {} ({})", mode, source)
}
