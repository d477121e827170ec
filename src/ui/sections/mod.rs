//! Section builders.
//!
//! Each builder appends one page section to a [`DocumentBuilder`]. Row
//! counts depend only on the layout; engine state only changes what the
//! rows contain.

pub mod about;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::document::DocumentBuilder;
use super::entrance::Entrance;
use super::text;
use super::theme::blend;

/// Width of the gradient rule under section titles.
const RULE_WIDTH: u16 = 12;

/// Section title, gradient rule and optional intro paragraph.
pub(crate) fn heading(
    builder: &mut DocumentBuilder,
    title: &'static str,
    intro: Option<&'static str>,
    entrance: Entrance,
) {
    let palette = builder.palette();
    builder.push_centered(
        vec![Span::styled(
            title,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )],
        entrance,
    );

    let rule = (0..RULE_WIDTH)
        .map(|i| {
            let t = f32::from(i) / f32::from(RULE_WIDTH - 1);
            Span::styled(
                "━",
                Style::default().fg(blend(palette.accent, palette.accent_alt, t)),
            )
        })
        .collect();
    builder.push_centered(rule, entrance);

    if let Some(intro) = intro {
        builder.blank();
        for line in text::wrap(intro, builder.ctx().prose_width()) {
            builder.push_centered(
                vec![Span::styled(line, Style::default().fg(palette.muted))],
                entrance,
            );
        }
    }
}

/// `count` spaces.
pub(crate) fn spaces(count: u16) -> Span<'static> {
    Span::raw(" ".repeat(usize::from(count)))
}
