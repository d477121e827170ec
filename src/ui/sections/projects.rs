//! Featured projects: one card per project, lifting while hovered.

use std::time::Duration;

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::{heading, spaces};
use crate::content::{Portfolio, Project, SectionId};
use crate::ui::card::Card;
use crate::ui::document::{spans_width, DocumentBuilder, HitTarget, PageView};
use crate::ui::entrance::stagger;
use crate::ui::text;
use crate::ui::theme::Palette;

/// Gap between technology chips.
const CHIP_GAP: u16 = 1;

pub fn build(builder: &mut DocumentBuilder, portfolio: &Portfolio, view: &PageView<'_>) {
    let ctx = builder.ctx();
    let palette = builder.palette();
    let reveal = view.projects;
    let now = view.now;

    builder.begin_section(SectionId::Projects, palette.background);
    builder.blank();
    heading(
        builder,
        "Featured Projects",
        Some(portfolio.projects_intro),
        reveal.entrance(now, Duration::ZERO),
    );
    builder.blank();

    let width = ctx.project_card_width();
    let column = text::center_offset(width, ctx.content_width());
    for (index, project) in portfolio.projects.iter().enumerate() {
        let lifted = view.hovered_project == Some(project.title);
        let card = project_card(project, width, lifted, palette);
        let entrance = reveal.entrance(now, stagger(index));

        let start = builder.row();
        for row in card.render_slot(lifted, palette.border) {
            builder.push_animated(column, row, entrance);
        }
        builder.target(
            HitTarget::Hover {
                section: SectionId::Projects,
                key: project.title,
            },
            start..builder.row(),
            column,
            width,
        );
    }
    builder.blank();
}

fn project_card(project: &Project, width: u16, lifted: bool, palette: &Palette) -> Card {
    let border = if lifted { palette.accent } else { palette.border };
    let mut card = Card::new(width, border, palette.card);
    if project.featured {
        card.badge(vec![Span::styled(
            " ★ Featured ",
            Style::default()
                .fg(palette.hero_fg)
                .bg(palette.badge)
                .add_modifier(Modifier::BOLD),
        )]);
    }

    let title_color = if lifted { palette.accent } else { palette.text };
    card.row(vec![Span::styled(
        project.title,
        Style::default()
            .fg(title_color)
            .add_modifier(Modifier::BOLD),
    )]);
    card.blank();
    for line in text::wrap(project.description, card.inner_width()) {
        card.row(vec![Span::styled(line, Style::default().fg(palette.muted))]);
    }
    card.blank();
    for row in chip_rows(project.technologies, card.inner_width(), lifted, palette) {
        card.row(row);
    }
    card.blank();
    card.row(link("⌥ Code      ", project.github, palette));
    card.row(link("↗ Live Demo ", project.demo, palette));
    card
}

/// Technology chips packed into rows of at most `width` columns.
fn chip_rows(
    technologies: &[&'static str],
    width: u16,
    lifted: bool,
    palette: &Palette,
) -> Vec<Vec<Span<'static>>> {
    let style = if lifted {
        Style::default()
            .fg(palette.accent)
            .bg(palette.chip)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text).bg(palette.chip)
    };

    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut used = 0u16;
    for technology in technologies {
        let chip = Span::styled(format!(" {} ", technology), style);
        let chip_width = spans_width(std::slice::from_ref(&chip));
        match rows.last_mut() {
            Some(row) if used + CHIP_GAP + chip_width <= width => {
                row.push(spaces(CHIP_GAP));
                row.push(chip);
                used += CHIP_GAP + chip_width;
            }
            _ => {
                rows.push(vec![chip]);
                used = chip_width;
            }
        }
    }
    rows
}

fn link(label: &'static str, url: &'static str, palette: &Palette) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            label,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            url,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use crate::ui::document::Document;
    use crate::ui::entrance::Reveal;
    use crate::ui::layout::LayoutContext;
    use crate::ui::sample_view;
    use crate::ui::theme::LIGHT;

    fn row_text(row: &[Span<'_>]) -> String {
        row.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_chips_wrap_to_width() {
        let rows = chip_rows(PORTFOLIO.projects[0].technologies, 20, false, &LIGHT);
        assert!(rows.len() > 1);
        for row in &rows {
            assert!(spans_width(row) <= 20);
        }
        let all: String = rows.iter().map(|r| row_text(r)).collect();
        for technology in PORTFOLIO.projects[0].technologies {
            assert!(all.contains(technology));
        }
    }

    #[test]
    fn test_featured_project_has_badge() {
        let featured = project_card(&PORTFOLIO.projects[0], 60, false, &LIGHT);
        assert!(row_text(&featured.render()[0]).contains("★ Featured"));

        let plain = project_card(&PORTFOLIO.projects[1], 60, false, &LIGHT);
        assert!(!row_text(&plain.render()[0]).contains("Featured"));
    }

    #[test]
    fn test_hovered_card_lifts_within_its_slot() {
        let ctx = LayoutContext::new(100, 30);
        let mut view = sample_view(Duration::from_secs(1));
        view.projects = Reveal::SHOWN;
        let resting = Document::build(ctx, &PORTFOLIO, &view);
        view.hovered_project = Some(PORTFOLIO.projects[1].title);
        let hovered = Document::build(ctx, &PORTFOLIO, &view);

        let slot = |doc: &Document| {
            doc.targets
                .iter()
                .find(|t| {
                    t.target
                        == HitTarget::Hover {
                            section: SectionId::Projects,
                            key: PORTFOLIO.projects[1].title,
                        }
                })
                .map(|t| t.rect)
                .unwrap()
        };
        assert_eq!(slot(&resting), slot(&hovered));

        let rect = slot(&hovered);
        let first = |doc: &Document| row_text(&doc.lines[usize::from(rect.y)].spans);
        assert!(first(&resting).trim().is_empty());
        assert!(first(&hovered).contains('╭'));
        let last = row_text(&hovered.lines[usize::from(rect.y + rect.height - 1)].spans);
        assert!(last.contains('▔'));
    }

    #[test]
    fn test_cards_stagger_in() {
        let ctx = LayoutContext::new(100, 30);
        let mut view = sample_view(Duration::from_millis(150));
        view.projects = Reveal::mounted_at(Duration::ZERO);
        let doc = Document::build(ctx, &PORTFOLIO, &view);
        let rows = doc.section_rows(SectionId::Projects).unwrap();
        let text: String = doc.lines[usize::from(rows.start)..usize::from(rows.end)]
            .iter()
            .map(|l| row_text(&l.spans))
            .collect();

        assert!(text.contains(PORTFOLIO.projects[0].title));
        assert!(text.contains(PORTFOLIO.projects[1].title));
        assert!(!text.contains(PORTFOLIO.projects[2].title));
    }
}
