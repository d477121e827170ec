//! About: avatar, bio and areas of interest.

use std::time::Duration;

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::heading;
use crate::content::{Portfolio, SectionId};
use crate::ui::card::Card;
use crate::ui::document::{DocumentBuilder, PageView};
use crate::ui::entrance::stagger;
use crate::ui::text;

const AVATAR_DELAY: Duration = Duration::from_millis(200);
const BIO_DELAY: Duration = Duration::from_millis(400);
const INTERESTS_DELAY: Duration = Duration::from_millis(600);
const FIRST_INTEREST_DELAY: Duration = Duration::from_millis(800);

pub fn build(builder: &mut DocumentBuilder, portfolio: &Portfolio, view: &PageView<'_>) {
    let ctx = builder.ctx();
    let palette = builder.palette();
    let about = &portfolio.about;
    let reveal = view.about;
    let now = view.now;

    builder.begin_section(SectionId::About, palette.surface);
    builder.blank();
    heading(builder, "About Me", None, reveal.entrance(now, Duration::ZERO));
    builder.blank();

    let avatar_entrance = reveal.entrance(now, AVATAR_DELAY);
    let mut avatar = Card::new(10, palette.accent, palette.card);
    avatar.centered(vec![Span::raw(about.avatar)]);
    let avatar_column = text::center_offset(avatar.width(), ctx.content_width());
    for row in avatar.render() {
        builder.push_animated(avatar_column, row, avatar_entrance);
    }
    builder.blank();

    let bio_entrance = reveal.entrance(now, BIO_DELAY);
    let prose = ctx.prose_width();
    let prose_column = text::center_offset(prose, ctx.content_width());
    builder.push_animated(
        prose_column,
        vec![Span::styled(
            about.greeting,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )],
        bio_entrance,
    );
    for paragraph in about.paragraphs {
        builder.blank();
        for line in text::wrap(paragraph, prose) {
            builder.push_animated(
                prose_column,
                vec![Span::styled(line, Style::default().fg(palette.muted))],
                bio_entrance,
            );
        }
    }
    builder.blank();
    builder.blank();

    builder.push_centered(
        vec![Span::styled(
            "Areas of Interest",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )],
        reveal.entrance(now, INTERESTS_DELAY),
    );
    builder.blank();

    for (index, interest) in about.interests.iter().enumerate() {
        let entrance = reveal.entrance(now, FIRST_INTEREST_DELAY + stagger(index));
        builder.push_centered(
            vec![
                Span::raw(interest.icon),
                Span::raw("  "),
                Span::styled(
                    interest.title,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ],
            entrance,
        );
        for line in text::wrap(interest.description, prose.min(60)) {
            builder.push_centered(
                vec![Span::styled(line, Style::default().fg(palette.muted))],
                entrance,
            );
        }
        builder.blank();
    }
    builder.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use crate::ui::document::Document;
    use crate::ui::entrance::Reveal;
    use crate::ui::layout::LayoutContext;
    use crate::ui::sample_view;

    fn about_text(view: &PageView<'_>) -> String {
        let doc = Document::build(LayoutContext::new(90, 30), &PORTFOLIO, view);
        let rows = doc.section_rows(SectionId::About).unwrap();
        doc.lines[usize::from(rows.start)..usize::from(rows.end)]
            .iter()
            .map(|line| {
                let mut s: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                s.push('\n');
                s
            })
            .collect()
    }

    #[test]
    fn test_revealed_about_shows_bio_and_interests() {
        let mut view = sample_view(Duration::from_secs(1));
        view.about = Reveal::SHOWN;
        let text = about_text(&view);

        assert!(text.contains("About Me"));
        assert!(text.contains(PORTFOLIO.about.greeting));
        for interest in PORTFOLIO.about.interests {
            assert!(text.contains(interest.title));
        }
    }

    #[test]
    fn test_interests_arrive_after_bio() {
        let mut view = sample_view(Duration::from_millis(500));
        view.about = Reveal::mounted_at(Duration::ZERO);
        let text = about_text(&view);

        assert!(text.contains("About Me"));
        assert!(text.contains(PORTFOLIO.about.greeting));
        assert!(!text.contains("Areas of Interest"));
        assert!(!text.contains("Data Science"));

        view.now = Duration::from_millis(950);
        let text = about_text(&view);
        assert!(text.contains("AI/ML"));
        assert!(text.contains("Data Science"));
        assert!(!text.contains("Web Development"));
    }
}
