//! Skills: a responsive grid of category cards with animated level bars.
//!
//! Hovering a category amplifies its card. It lifts, percentages turn bold
//! with a tooltip over each bar, a highlight sweeps along the filled cells,
//! and sparks run around the border.

use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use super::{heading, spaces};
use crate::content::{Portfolio, SectionId, Skill, SkillCategory};
use crate::ui::card::{perimeter_cell, Card, Spark};
use crate::ui::document::{DocumentBuilder, HitTarget, PageView};
use crate::ui::entrance::{stagger, Entrance, Reveal};
use crate::ui::layout::CARD_GAP;
use crate::ui::text;
use crate::ui::theme::{blend, fade, gradient, Palette};

/// Skill rows start after the card itself.
const SKILL_ROWS_DELAY: Duration = Duration::from_millis(1000);
const SKILL_ROW_STAGGER: Duration = Duration::from_millis(50);

/// Bars fill after their row appears.
const BAR_DELAY: Duration = Duration::from_millis(1200);
const BAR_DURATION: Duration = Duration::from_millis(1500);

const SUMMARY_DELAY: Duration = Duration::from_millis(800);

/// One sweep of the bar highlight.
const SHINE_CYCLE_MS: u128 = 1500;

const SPARK_COUNT: u64 = 8;
const SPARK_CYCLE_MS: u64 = 2000;
const SPARK_DELAY_MS: u64 = 200;
const SPARK_GLYPHS: [char; 3] = ['·', '✦', '·'];

/// Opacity of the stats row while the card is at rest.
const STATS_REST_OPACITY: f32 = 0.7;

pub fn build(builder: &mut DocumentBuilder, portfolio: &Portfolio, view: &PageView<'_>) {
    let ctx = builder.ctx();
    let palette = builder.palette();
    let reveal = view.skills;
    let now = view.now;

    builder.begin_section(SectionId::Skills, palette.background);
    builder.blank();
    heading(
        builder,
        "Skills & Technologies",
        Some(portfolio.skills_intro),
        reveal.entrance(now, Duration::ZERO),
    );
    builder.blank();

    let columns = usize::from(ctx.skill_columns());
    let card_width = ctx.skill_card_width();
    let cards_in_row = u16::try_from(columns).unwrap_or(1);
    let grid_width = card_width * cards_in_row + CARD_GAP * (cards_in_row - 1);
    let grid_left = text::center_offset(grid_width, ctx.content_width());

    for (row_index, chunk) in portfolio.skill_categories.chunks(columns).enumerate() {
        let slots: Vec<_> = chunk
            .iter()
            .enumerate()
            .map(|(offset, category)| {
                let index = row_index * columns + offset;
                let amplified = view.hovered_category == Some(category.title);
                let card =
                    category_card(category, index, card_width, amplified, reveal, now, palette);
                let entrance = reveal.entrance(now, stagger(index));
                (card.render_slot(amplified, palette.border), entrance)
            })
            .collect();
        let height = slots.iter().map(|(rows, _)| rows.len()).max().unwrap_or(0);

        let start = builder.row();
        for line in 0..height {
            let mut spans = Vec::new();
            for (offset, (rows, entrance)) in slots.iter().enumerate() {
                if offset > 0 {
                    spans.push(spaces(CARD_GAP));
                }
                match rows.get(line) {
                    Some(row) if !entrance.is_hidden() => {
                        spans.extend(builder.fade_spans(row.clone(), entrance.progress()));
                    }
                    _ => spans.push(spaces(card_width)),
                }
            }
            builder.push_at(grid_left, spans);
        }

        for (offset, category) in chunk.iter().enumerate() {
            let column = grid_left + u16::try_from(offset).unwrap_or(0) * (card_width + CARD_GAP);
            builder.target(
                HitTarget::Hover {
                    section: SectionId::Skills,
                    key: category.title,
                },
                start..builder.row(),
                column,
                card_width,
            );
        }
        builder.blank();
    }

    summary(builder, portfolio, reveal.entrance(now, SUMMARY_DELAY));
    builder.blank();
}

fn category_card(
    category: &SkillCategory,
    index: usize,
    width: u16,
    amplified: bool,
    reveal: Reveal,
    now: Duration,
    palette: &Palette,
) -> Card {
    let border = if amplified {
        gradient(category.gradient, 0.5)
    } else {
        palette.border
    };
    let mut card = Card::new(width, border, palette.card);
    let inner = card.inner_width();

    card.centered(vec![Span::styled(
        category.icon,
        Style::default()
            .fg(gradient(category.gradient, 0.0))
            .add_modifier(Modifier::BOLD),
    )]);
    card.centered(vec![Span::styled(
        category.title,
        Style::default()
            .fg(if amplified { palette.accent } else { palette.text })
            .add_modifier(Modifier::BOLD),
    )]);
    card.blank();

    let card_delay = stagger(index);
    for (skill_index, skill) in category.skills.iter().enumerate() {
        let step = u32::try_from(skill_index).unwrap_or(0);
        let row_entrance =
            reveal.entrance(now, SKILL_ROWS_DELAY + card_delay + SKILL_ROW_STAGGER * step);
        let fill = reveal
            .entrance_for(now, BAR_DELAY + card_delay + stagger(skill_index), BAR_DURATION)
            .progress();

        if row_entrance.is_hidden() {
            card.blank();
            card.blank();
        } else {
            card.row(fade_row(
                skill_label(skill, inner, amplified, palette),
                row_entrance.progress(),
                palette.card,
            ));
            if amplified {
                card.row(tooltip(skill, inner, palette));
            } else {
                card.blank();
            }
        }
        card.row(level_bar(skill, category, inner, fill, amplified, now, palette));
    }

    card.rule(palette.border);
    let opacity = if amplified { 1.0 } else { STATS_REST_OPACITY };
    card.row(stats_row(inner, opacity, palette));

    if amplified {
        add_sparks(&mut card, category, index, now);
    }
    card
}

/// `icon name` on the left, the level on the right.
fn skill_label(
    skill: &Skill,
    width: u16,
    amplified: bool,
    palette: &Palette,
) -> Vec<Span<'static>> {
    let left = format!("{} {}", skill.icon, skill.name);
    let right = format!("{}%", skill.level);
    let gap = width
        .saturating_sub(text::width(&left) + text::width(&right))
        .max(1);
    let level_style = if amplified {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    vec![
        Span::styled(left, Style::default().fg(palette.text)),
        spaces(gap),
        Span::styled(right, level_style),
    ]
}

/// Level badge centered over the bar position matching the level.
fn tooltip(skill: &Skill, width: u16, palette: &Palette) -> Vec<Span<'static>> {
    let label = format!(" {}% ", skill.level);
    let label_width = text::width(&label);
    let anchor = u32::from(width) * u32::from(skill.level.min(100)) / 100;
    let anchor = u16::try_from(anchor).unwrap_or(width);
    let column = anchor
        .saturating_sub(label_width / 2)
        .min(width.saturating_sub(label_width));
    vec![
        spaces(column),
        Span::styled(
            label,
            Style::default()
                .fg(palette.tooltip_fg)
                .bg(palette.tooltip_bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]
}

/// Bar cells: gradient fill scaled by `progress`, then the empty track.
fn level_bar(
    skill: &Skill,
    category: &SkillCategory,
    width: u16,
    progress: f32,
    amplified: bool,
    now: Duration,
    palette: &Palette,
) -> Vec<Span<'static>> {
    let target = f32::from(width) * f32::from(skill.level.min(100)) / 100.0;
    let filled = (target * progress.clamp(0.0, 1.0)).round() as u16;
    let filled = filled.min(width);

    // The highlight enters from the left edge and leaves past the right
    let shine = amplified.then(|| {
        let phase = (now.as_millis() % SHINE_CYCLE_MS) as f32 / SHINE_CYCLE_MS as f32;
        phase * f32::from(filled + 4) - 2.0
    });

    let mut spans = Vec::with_capacity(usize::from(width));
    for cell in 0..filled {
        let t = if width > 1 {
            f32::from(cell) / f32::from(width - 1)
        } else {
            0.0
        };
        let mut color = gradient(category.gradient, t);
        if let Some(center) = shine {
            let distance = (f32::from(cell) - center).abs();
            if distance < 2.0 {
                color = blend(color, Color::Rgb(255, 255, 255), 0.3 * (1.0 - distance / 2.0));
            }
        }
        spans.push(Span::styled("█", Style::default().fg(color)));
    }
    if filled < width {
        spans.push(Span::styled(
            "░".repeat(usize::from(width - filled)),
            Style::default().fg(palette.track),
        ));
    }
    spans
}

fn stats_row(width: u16, opacity: f32, palette: &Palette) -> Vec<Span<'static>> {
    let left = "★ Expertise";
    let right = "↗ Growing";
    let gap = width
        .saturating_sub(text::width(left) + text::width(right))
        .max(1);
    let muted = fade(palette.muted, palette.card, opacity);
    vec![
        Span::styled("★", Style::default().fg(fade(palette.star, palette.card, opacity))),
        Span::styled(" Expertise", Style::default().fg(muted)),
        spaces(gap),
        Span::styled("↗", Style::default().fg(fade(palette.trend, palette.card, opacity))),
        Span::styled(" Growing", Style::default().fg(muted)),
    ]
}

fn fade_row(spans: Vec<Span<'static>>, opacity: f32, background: Color) -> Vec<Span<'static>> {
    if opacity >= 1.0 {
        return spans;
    }
    spans
        .into_iter()
        .map(|span| {
            let style = match span.style.fg {
                Some(fg) => span.style.fg(fade(fg, background, opacity)),
                None => span.style,
            };
            Span::styled(span.content, style)
        })
        .collect()
}

/// Sparks on the card border. Each spark lives for one cycle, offset from
/// its neighbours, and jumps to a new border cell every cycle.
fn add_sparks(card: &mut Card, category: &SkillCategory, index: usize, now: Duration) {
    let width = card.width();
    let height = card.height();
    let now_ms = u64::try_from(now.as_millis()).unwrap_or(u64::MAX);

    for spark in 0..SPARK_COUNT {
        let delay = spark * SPARK_DELAY_MS;
        let Some(elapsed) = now_ms.checked_sub(delay) else {
            continue;
        };
        let cycle = elapsed / SPARK_CYCLE_MS;
        let phase = (elapsed % SPARK_CYCLE_MS) as f32 / SPARK_CYCLE_MS as f32;
        let frame = (phase * SPARK_GLYPHS.len() as f32) as usize;
        let glyph = SPARK_GLYPHS[frame.min(SPARK_GLYPHS.len() - 1)];

        let seed = scatter(index as u64, spark, cycle);
        let (column, row) = perimeter_cell(seed as usize, width, height);
        card.spark(
            column,
            row,
            Spark {
                glyph,
                color: gradient(category.gradient, (seed % 100) as f32 / 99.0),
            },
        );
    }
}

/// Deterministic scatter of `(card, spark, cycle)` to a pseudo-random value.
fn scatter(card: u64, spark: u64, cycle: u64) -> u64 {
    let mut x = card
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(spark.wrapping_mul(0xBF58_476D_1CE4_E5B9))
        .wrapping_add(cycle.wrapping_mul(0x94D0_49BB_1331_11EB));
    x ^= x >> 31;
    x = x.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x ^ (x >> 29)
}

/// The closing "always learning" box.
fn summary(builder: &mut DocumentBuilder, portfolio: &Portfolio, entrance: Entrance) {
    let ctx = builder.ctx();
    let palette = builder.palette();
    let (title, body) = portfolio.skills_summary;

    let width = ctx.content_width().min(ctx.prose_width() + 6);
    let mut card = Card::new(width, palette.accent_alt, palette.surface);
    card.blank();
    card.centered(vec![Span::styled(
        title,
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )]);
    card.blank();
    for line in text::wrap(body, card.inner_width()) {
        let line = vec![Span::styled(line, Style::default().fg(palette.muted))];
        card.centered(line);
    }
    card.blank();

    let column = text::center_offset(width, ctx.content_width());
    for row in card.render() {
        builder.push_animated(column, row, entrance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use crate::ui::document::{spans_width, Document};
    use crate::ui::layout::LayoutContext;
    use crate::ui::sample_view;
    use crate::ui::theme::LIGHT;

    fn row_text(row: &[Span<'_>]) -> String {
        row.iter().map(|s| s.content.as_ref()).collect()
    }

    fn count(row: &[Span<'_>], glyph: char) -> usize {
        row_text(row).chars().filter(|c| *c == glyph).count()
    }

    fn frontend() -> &'static SkillCategory {
        PORTFOLIO.category("Frontend").unwrap()
    }

    #[test]
    fn test_bar_fills_to_level() {
        let skill = &frontend().skills[0];
        let full = level_bar(skill, frontend(), 20, 1.0, false, Duration::ZERO, &LIGHT);
        assert_eq!(count(&full, '█'), 19);
        assert_eq!(count(&full, '░'), 1);
        assert_eq!(spans_width(&full), 20);

        let empty = level_bar(skill, frontend(), 20, 0.0, false, Duration::ZERO, &LIGHT);
        assert_eq!(count(&empty, '█'), 0);
        assert_eq!(count(&empty, '░'), 20);
    }

    #[test]
    fn test_shine_only_when_amplified() {
        let skill = &frontend().skills[0];
        let now = Duration::from_millis(750);
        let rest = level_bar(skill, frontend(), 20, 1.0, false, now, &LIGHT);
        let lit = level_bar(skill, frontend(), 20, 1.0, true, now, &LIGHT);
        assert_eq!(row_text(&rest), row_text(&lit));
        assert_ne!(rest, lit);
    }

    #[test]
    fn test_tooltip_sits_over_level() {
        let skill = &frontend().skills[1];
        let row = tooltip(skill, 20, &LIGHT);
        let text = row_text(&row);
        let at = text.find("85%").unwrap();
        assert!((15..=17).contains(&at), "tooltip at {}", at);

        let narrow = tooltip(skill, 5, &LIGHT);
        assert!(spans_width(&narrow) <= 5);
    }

    #[test]
    fn test_amplified_card_has_sparks_and_tooltips() {
        let now = Duration::from_secs(10);
        let rest = category_card(frontend(), 1, 30, false, Reveal::SHOWN, now, &LIGHT);
        let hot = category_card(frontend(), 1, 30, true, Reveal::SHOWN, now, &LIGHT);
        assert_eq!(rest.height(), hot.height());

        let rest_text: String = rest.render().iter().map(|r| row_text(r)).collect();
        let hot_text: String = hot.render().iter().map(|r| row_text(r)).collect();
        assert!(!rest_text.contains('✦') && !rest_text.contains('·'));
        assert!(hot_text.contains('✦') || hot_text.contains('·'));
        assert!(hot_text.contains(" 95% "));
    }

    #[test]
    fn test_sparks_are_deterministic() {
        let now = Duration::from_millis(4321);
        let a = category_card(frontend(), 1, 30, true, Reveal::SHOWN, now, &LIGHT);
        let b = category_card(frontend(), 1, 30, true, Reveal::SHOWN, now, &LIGHT);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_grid_places_cards_side_by_side() {
        let ctx = LayoutContext::new(120, 40);
        let doc = Document::build(ctx, &PORTFOLIO, &sample_view(Duration::ZERO));
        let rects: Vec<_> = doc
            .targets
            .iter()
            .filter(|t| matches!(t.target, HitTarget::Hover { section: SectionId::Skills, .. }))
            .map(|t| t.rect)
            .collect();

        assert_eq!(rects.len(), 4);
        assert!(rects.iter().all(|r| r.y == rects[0].y));
        for pair in rects.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + pair[0].width + CARD_GAP);
        }

        let ctx = LayoutContext::new(80, 40);
        let doc = Document::build(ctx, &PORTFOLIO, &sample_view(Duration::ZERO));
        let rows: Vec<u16> = doc
            .targets
            .iter()
            .filter(|t| matches!(t.target, HitTarget::Hover { section: SectionId::Skills, .. }))
            .map(|t| t.rect.y)
            .collect();
        assert_eq!(rows[0], rows[1]);
        assert!(rows[2] > rows[0]);
    }

    #[test]
    fn test_revealed_grid_shows_every_skill() {
        let ctx = LayoutContext::new(120, 40);
        let mut view = sample_view(Duration::from_secs(10));
        view.skills = Reveal::SHOWN;
        let doc = Document::build(ctx, &PORTFOLIO, &view);
        let text: String = doc.lines.iter().map(|l| row_text(&l.spans)).collect();

        for category in PORTFOLIO.skill_categories {
            assert!(text.contains(category.title));
            for skill in category.skills {
                assert!(text.contains(skill.name), "{} missing", skill.name);
            }
        }
        assert!(text.contains(PORTFOLIO.skills_summary.0));
    }
}
