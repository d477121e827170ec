//! Footer credits. Jumping to "Contact" lands here.

use std::time::Duration;

use ratatui::style::Style;
use ratatui::text::Span;

use crate::content::{Portfolio, SectionId};
use crate::ui::document::{DocumentBuilder, PageView};

const HEART: char = '♥';

pub fn build(builder: &mut DocumentBuilder, portfolio: &Portfolio, view: &PageView<'_>) {
    let palette = builder.palette();
    let entrance = view.footer.entrance(view.now, Duration::ZERO);

    builder.begin_section(SectionId::Contact, palette.hero_bg);
    builder.blank();

    let plain = Style::default().fg(palette.hero_muted);
    let made_by = match portfolio.footer.made_by.split_once(HEART) {
        Some((before, after)) => vec![
            Span::styled(before, plain),
            Span::styled(HEART.to_string(), Style::default().fg(palette.heart)),
            Span::styled(after, plain),
        ],
        None => vec![Span::styled(portfolio.footer.made_by, plain)],
    };
    builder.push_centered(made_by, entrance);
    builder.push_centered(
        vec![Span::styled(
            portfolio.footer.copyright,
            Style::default().fg(palette.muted),
        )],
        entrance,
    );
    builder.blank();
}
