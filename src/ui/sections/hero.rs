//! Hero: name, typewriter caption, tagline and call-to-action buttons.
//!
//! The hero fills the viewport. Its block animates in at mount with the
//! caption, tagline and buttons staggered behind the name, and a chevron
//! bounces at the bottom. Particles drift through the blank cells behind
//! everything.

use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use super::spaces;
use crate::content::{Portfolio, SectionId};
use crate::ui::document::{DocumentBuilder, HitTarget, PageView};
use crate::ui::entrance::Entrance;
use crate::ui::particles::{PARTICLE_GLYPH, PARTICLE_LEVELS};
use crate::ui::text;
use crate::ui::theme::fade;

const CAPTION_DELAY: Duration = Duration::from_millis(500);
const TAGLINE_DELAY: Duration = Duration::from_millis(1000);
const ACTIONS_DELAY: Duration = Duration::from_millis(1300);

/// Full bounce period of the scroll chevron.
pub const BOUNCE_PERIOD_MS: u128 = 2000;

/// Gap between buttons on one row.
const BUTTON_GAP: u16 = 2;

/// Caret drawn after the typed caption.
pub const CARET: &str = "|";

/// Particle color at full brightness, before fading into the background.
const PARTICLE_COLOR: Color = Color::Rgb(96, 165, 250);

/// Opacity of the brightest particle.
const PARTICLE_OPACITY: f32 = 0.6;

struct Row {
    column: u16,
    spans: Vec<Span<'static>>,
    entrance: Entrance,
    targets: Vec<(HitTarget, u16, u16)>,
}

pub fn build(builder: &mut DocumentBuilder, portfolio: &Portfolio, view: &PageView<'_>) {
    let ctx = builder.ctx();
    let palette = builder.palette();
    let hero = &portfolio.hero;
    let now = view.now;
    let intro = view.hero.intro;
    let content = ctx.content_width();
    let height = ctx.hero_height();

    builder.begin_section(SectionId::Home, palette.hero_bg);
    let first_row = builder.row();

    let mut rows: Vec<Row> = Vec::new();
    let centered = |spans: Vec<Span<'static>>, entrance: Entrance| Row {
        column: text::center_offset(crate::ui::document::spans_width(&spans), content),
        spans,
        entrance,
        targets: Vec::new(),
    };

    let name_entrance = intro.entrance(now, Duration::ZERO);
    rows.push(centered(
        vec![Span::styled(
            hero.name,
            Style::default()
                .fg(palette.hero_fg)
                .add_modifier(Modifier::BOLD),
        )],
        name_entrance,
    ));
    rows.push(centered(Vec::new(), name_entrance));

    // Anchor the caption where the complete text would be centered so the
    // typed prefix grows rightward instead of re-centering on every tick.
    let full_width = text::width(view.hero.full_caption) + text::width(CARET) + 1;
    let caret = if view.hero.caret_visible { CARET } else { " " };
    rows.push(Row {
        column: text::center_offset(full_width, content),
        spans: vec![
            Span::styled(
                view.hero.caption.to_string(),
                Style::default().fg(palette.hero_caption),
            ),
            Span::raw(" "),
            Span::styled(caret, Style::default().fg(palette.hero_caption)),
        ],
        entrance: intro.entrance(now, CAPTION_DELAY),
        targets: Vec::new(),
    });
    rows.push(centered(Vec::new(), Entrance::Shown));

    let tagline_entrance = intro.entrance(now, TAGLINE_DELAY);
    for line in text::wrap(hero.tagline, ctx.prose_width()) {
        rows.push(centered(
            vec![Span::styled(line, Style::default().fg(palette.hero_muted))],
            tagline_entrance,
        ));
    }
    rows.push(centered(Vec::new(), Entrance::Shown));

    let actions_entrance = intro.entrance(now, ACTIONS_DELAY);
    for labels in button_rows(hero.actions, content) {
        rows.push(button_row(&labels, content, actions_entrance, palette));
    }

    // Two rows at the bottom hold the bouncing chevron
    let block_limit = height.saturating_sub(2);
    let block = u16::try_from(rows.len()).unwrap_or(u16::MAX).min(block_limit);
    let top = (block_limit - block) / 2;

    builder.blanks(top);
    for row in rows.into_iter().take(usize::from(block)) {
        let at = builder.row();
        for (target, column, width) in row.targets {
            builder.target(target, at..at + 1, column, width);
        }
        builder.push_animated(row.column, row.spans, row.entrance);
    }
    builder.blanks(block_limit - top - block);

    let chevron_low = (now.as_millis() % BOUNCE_PERIOD_MS) >= BOUNCE_PERIOD_MS / 2;
    let chevron = Span::styled(
        "⌄",
        Style::default().fg(fade(palette.hero_muted, palette.hero_bg, 0.6)),
    );
    let chevron_column = text::center_offset(1, content);
    for low in [false, true] {
        if height < 2 {
            break;
        }
        if low == chevron_low {
            builder.push_at(chevron_column, vec![chevron.clone()]);
        } else {
            builder.blank();
        }
    }

    for cell in view.hero.particles.cells(now, ctx.width, height) {
        let opacity = f32::from(cell.level) / f32::from(PARTICLE_LEVELS) * PARTICLE_OPACITY;
        builder.overlay_glyph(
            first_row + cell.y,
            cell.x,
            PARTICLE_GLYPH,
            fade(PARTICLE_COLOR, palette.hero_bg, opacity),
        );
    }
}

/// Group button labels into rows that fit `width`.
fn button_rows(labels: &'static [&'static str], width: u16) -> Vec<Vec<&'static str>> {
    let mut rows: Vec<Vec<&'static str>> = Vec::new();
    let mut used = 0u16;
    for &label in labels {
        let label_width = button_width(label);
        match rows.last_mut() {
            Some(row) if used + BUTTON_GAP + label_width <= width => {
                row.push(label);
                used += BUTTON_GAP + label_width;
            }
            _ => {
                rows.push(vec![label]);
                used = label_width;
            }
        }
    }
    rows
}

fn button_width(label: &str) -> u16 {
    text::width(label) + 4
}

fn button_row(
    labels: &[&'static str],
    content: u16,
    entrance: Entrance,
    palette: &crate::ui::theme::Palette,
) -> Row {
    let total = labels.iter().map(|l| button_width(l)).sum::<u16>()
        + BUTTON_GAP * u16::try_from(labels.len().saturating_sub(1)).unwrap_or(0);
    let start = text::center_offset(total, content);

    let mut spans = Vec::new();
    let mut targets = Vec::new();
    let mut column = start;
    for (index, &label) in labels.iter().enumerate() {
        if index > 0 {
            spans.push(spaces(BUTTON_GAP));
            column += BUTTON_GAP;
        }
        let (style, target) = button_style(label, palette);
        spans.push(Span::styled(format!("[ {} ]", label), style));
        if let Some(target) = target {
            targets.push((target, column, button_width(label)));
        }
        column += button_width(label);
    }

    Row {
        column: start,
        spans,
        entrance,
        targets,
    }
}

/// Style and click target of a button, by label.
fn button_style(label: &str, palette: &crate::ui::theme::Palette) -> (Style, Option<HitTarget>) {
    let solid = |bg: Color| {
        Style::default()
            .fg(palette.hero_fg)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };
    match label {
        "View My Work" => (
            solid(Color::Rgb(37, 99, 235)),
            Some(HitTarget::Jump(SectionId::Projects)),
        ),
        "Get In Touch" => (
            Style::default()
                .fg(Color::Rgb(96, 165, 250))
                .add_modifier(Modifier::BOLD),
            Some(HitTarget::Jump(SectionId::Contact)),
        ),
        _ => (solid(Color::Rgb(147, 51, 234)), None),
    }
}
