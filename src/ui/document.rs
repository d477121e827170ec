//! The scrolled page as a list of rendered rows.
//!
//! [`Document::build`] is a pure function of the layout and a [`PageView`]
//! snapshot. It returns the styled rows plus the geometry the event loop
//! needs: where each section sits (for viewport observation and jumps) and
//! which cells map to hover or click targets.
//!
//! Section heights depend only on the layout, never on the view state, so
//! geometry taken from one build stays valid for every later build at the
//! same size.

use std::ops::Range;
use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::entrance::{Entrance, Reveal};
use super::layout::LayoutContext;
use super::particles::ParticleField;
use super::sections;
use super::text;
use super::theme::{fade, Palette};
use crate::content::{Portfolio, SectionId};
use crate::engine::{ThemeMode, ThemeSource};

/// Something the pointer can hover or click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// A hoverable item owned by a section's hover state
    Hover { section: SectionId, key: &'static str },
    /// Scroll to a section
    Jump(SectionId),
    /// Flip the theme
    ToggleTheme,
    /// Open or close the navigation drawer
    ToggleMenu,
    /// Drawer entry: close the drawer and scroll to a section
    MenuItem(SectionId),
}

/// A target and the document cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpan {
    pub target: HitTarget,
    /// `x` is a screen column, `y` a document row
    pub rect: Rect,
}

/// Rows occupied by a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: SectionId,
    pub rows: Range<u16>,
}

/// Hero state read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSnapshot<'a> {
    /// Revealed typewriter prefix
    pub caption: &'a str,
    /// Complete caption, used to keep the prefix from re-centering
    pub full_caption: &'a str,
    pub caret_visible: bool,
    /// Mount-time entrance of the hero block
    pub intro: Reveal,
    /// Background layer drawn into the hero's blank cells
    pub particles: &'a ParticleField,
}

/// Navigation drawer state read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuSnapshot {
    pub open: bool,
    /// 0.0 fully closed, 1.0 fully extended
    pub openness: f32,
}

/// Everything the renderer reads from engine state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageView<'a> {
    pub mode: ThemeMode,
    pub source: ThemeSource,
    pub now: Duration,
    pub scroll_offset: u16,
    pub hero: HeroSnapshot<'a>,
    pub about: Reveal,
    pub projects: Reveal,
    pub hovered_project: Option<&'static str>,
    pub skills: Reveal,
    pub hovered_category: Option<&'static str>,
    pub footer: Reveal,
    pub menu: MenuSnapshot,
}

impl PageView<'_> {
    pub fn palette(&self) -> &'static Palette {
        Palette::for_mode(self.mode)
    }
}

/// Rendered rows and their geometry.
#[derive(Debug, Clone)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionSpan>,
    pub targets: Vec<TargetSpan>,
}

impl Document {
    /// Build every section of `portfolio` for the current frame.
    pub fn build(ctx: LayoutContext, portfolio: &Portfolio, view: &PageView<'_>) -> Self {
        let mut builder = DocumentBuilder::new(ctx, view.palette(), view.now);
        sections::hero::build(&mut builder, portfolio, view);
        sections::about::build(&mut builder, portfolio, view);
        sections::projects::build(&mut builder, portfolio, view);
        sections::skills::build(&mut builder, portfolio, view);
        sections::footer::build(&mut builder, portfolio, view);
        builder.finish()
    }

    /// Total rows.
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Rows of `section`.
    pub fn section_rows(&self, section: SectionId) -> Option<Range<u16>> {
        self.sections
            .iter()
            .find(|span| span.section == section)
            .map(|span| span.rows.clone())
    }

    /// Geometry without the rows.
    pub fn geometry(&self) -> DocumentGeometry {
        DocumentGeometry {
            height: self.height(),
            sections: self.sections.clone(),
            targets: self.targets.clone(),
        }
    }
}

/// Section rows and targets of a built document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentGeometry {
    pub height: u16,
    pub sections: Vec<SectionSpan>,
    pub targets: Vec<TargetSpan>,
}

impl DocumentGeometry {
    /// Rows of `section`.
    pub fn section_rows(&self, section: SectionId) -> Option<Range<u16>> {
        self.sections
            .iter()
            .find(|span| span.section == section)
            .map(|span| span.rows.clone())
    }

    /// Section containing document row `row`.
    pub fn section_at(&self, row: u16) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|span| span.rows.contains(&row))
            .map(|span| span.section)
    }
}

/// Appends rows for one document.
pub struct DocumentBuilder {
    ctx: LayoutContext,
    palette: &'static Palette,
    now: Duration,
    background: Color,
    lines: Vec<Line<'static>>,
    sections: Vec<SectionSpan>,
    targets: Vec<TargetSpan>,
    open_section: Option<(SectionId, u16)>,
}

impl DocumentBuilder {
    pub fn new(ctx: LayoutContext, palette: &'static Palette, now: Duration) -> Self {
        Self {
            ctx,
            palette,
            now,
            background: palette.background,
            lines: Vec::new(),
            sections: Vec::new(),
            targets: Vec::new(),
            open_section: None,
        }
    }

    pub fn ctx(&self) -> LayoutContext {
        self.ctx
    }

    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Background of the section being built.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Index of the next row.
    pub fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Start `section` with the given background. Closes any open section.
    pub fn begin_section(&mut self, section: SectionId, background: Color) {
        self.end_section();
        self.background = background;
        self.open_section = Some((section, self.row()));
    }

    /// Close the open section.
    pub fn end_section(&mut self) {
        if let Some((section, start)) = self.open_section.take() {
            self.sections.push(SectionSpan {
                section,
                rows: start..self.row(),
            });
        }
    }

    /// Push an empty row.
    pub fn blank(&mut self) {
        self.push_at(0, Vec::new());
    }

    /// Push `count` empty rows.
    pub fn blanks(&mut self, count: u16) {
        for _ in 0..count {
            self.blank();
        }
    }

    /// Push `spans` starting `column` columns into the content column.
    pub fn push_at(&mut self, column: u16, spans: Vec<Span<'static>>) {
        let left = self.ctx.margin().saturating_add(column);
        let line = self.finish_line(left, spans);
        self.lines.push(line);
    }

    /// Push `spans` centered in the content column, animated by `entrance`.
    pub fn push_centered(&mut self, spans: Vec<Span<'static>>, entrance: Entrance) {
        let column = text::center_offset(spans_width(&spans), self.ctx.content_width());
        self.push_animated(column, spans, entrance);
    }

    /// Push `spans` at `column`, faded and slid by `entrance`. Hidden items
    /// leave an empty row.
    pub fn push_animated(&mut self, column: u16, spans: Vec<Span<'static>>, entrance: Entrance) {
        if entrance.is_hidden() {
            self.blank();
            return;
        }
        let spans = self.fade_spans(spans, entrance.progress());
        self.push_at(column.saturating_add(entrance.slide()), spans);
    }

    /// Fade the foreground of every span toward the section background.
    pub fn fade_spans(&self, spans: Vec<Span<'static>>, opacity: f32) -> Vec<Span<'static>> {
        if opacity >= 1.0 {
            return spans;
        }
        let background = self.background;
        spans
            .into_iter()
            .map(|span| {
                let fg = span.style.fg.unwrap_or(self.palette.text);
                let bg = span.style.bg.map(|bg| fade(bg, background, opacity));
                let mut style = span.style.fg(fade(fg, background, opacity));
                style.bg = bg;
                Span::styled(span.content, style)
            })
            .collect()
    }

    /// Register a target covering `rows` and `width` columns from `column`
    /// of the content column.
    pub fn target(&mut self, target: HitTarget, rows: Range<u16>, column: u16, width: u16) {
        let x = self.ctx.margin().saturating_add(column);
        let width = width.min(self.ctx.width.saturating_sub(x));
        let height = rows.end.saturating_sub(rows.start);
        if width == 0 || height == 0 {
            return;
        }
        self.targets.push(TargetSpan {
            target,
            rect: Rect::new(x, rows.start, width, height),
        });
    }

    /// Draw `glyph` over the blank cell at screen column `x` of `row`.
    /// Cells holding anything but a space are left alone.
    pub fn overlay_glyph(&mut self, row: u16, x: u16, glyph: &'static str, fg: Color) {
        let Some(line) = self.lines.get_mut(usize::from(row)) else {
            return;
        };

        let mut column = 0u16;
        for index in 0..line.spans.len() {
            let span_width = text::width(&line.spans[index].content);
            if x >= column.saturating_add(span_width) {
                column = column.saturating_add(span_width);
                continue;
            }

            let span = &line.spans[index];
            let Some(byte) = text::blank_at(&span.content, x - column) else {
                return;
            };
            let style = span.style;
            let content = span.content.to_string();
            let (before, after) = (&content[..byte], &content[byte + 1..]);

            let mut replacement = Vec::with_capacity(3);
            if !before.is_empty() {
                replacement.push(Span::styled(before.to_string(), style));
            }
            replacement.push(Span::styled(glyph, style.fg(fg)));
            if !after.is_empty() {
                replacement.push(Span::styled(after.to_string(), style));
            }
            line.spans.splice(index..index + 1, replacement);
            return;
        }
    }

    pub fn finish(mut self) -> Document {
        self.end_section();
        Document {
            lines: self.lines,
            sections: self.sections,
            targets: self.targets,
        }
    }

    /// Clip to the screen width, pad to it, and paint the background.
    fn finish_line(&self, left: u16, spans: Vec<Span<'static>>) -> Line<'static> {
        let width = self.ctx.width;
        let base = Style::default().bg(self.background);
        let mut out: Vec<Span<'static>> = Vec::with_capacity(spans.len() + 2);
        let mut used = left.min(width);
        if used > 0 {
            out.push(Span::styled(" ".repeat(usize::from(used)), base));
        }

        for span in spans {
            if used >= width {
                break;
            }
            let span_width = text::width(&span.content);
            let style = base.patch(span.style);
            if used.saturating_add(span_width) <= width {
                used += span_width;
                out.push(Span::styled(span.content, style));
            } else {
                let clipped = text::truncate(&span.content, width - used);
                used += text::width(&clipped);
                out.push(Span::styled(clipped, style));
                break;
            }
        }

        if used < width {
            out.push(Span::styled(" ".repeat(usize::from(width - used)), base));
        }
        Line::from(out)
    }
}

/// Total display width of `spans`.
pub fn spans_width(spans: &[Span<'_>]) -> u16 {
    spans
        .iter()
        .map(|span| text::width(&span.content))
        .fold(0u16, u16::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use crate::ui::sample_view as view;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_every_row_is_exactly_screen_width() {
        for (width, height) in [(40, 20), (80, 24), (132, 40)] {
            let ctx = LayoutContext::new(width, height);
            let mut v = view(Duration::from_secs(10));
            v.about = Reveal::SHOWN;
            v.projects = Reveal::SHOWN;
            v.skills = Reveal::SHOWN;
            v.hovered_category = Some("Frontend");
            v.hovered_project = Some("E-commerce Platform");
            let doc = Document::build(ctx, &PORTFOLIO, &v);
            for (row, line) in doc.lines.iter().enumerate() {
                assert_eq!(
                    text::width(&line_text(line)),
                    width,
                    "row {} at width {}",
                    row,
                    width
                );
            }
        }
    }

    #[test]
    fn test_sections_are_contiguous_and_ordered() {
        let ctx = LayoutContext::new(80, 24);
        let doc = Document::build(ctx, &PORTFOLIO, &view(Duration::ZERO));

        let ids: Vec<SectionId> = doc.sections.iter().map(|s| s.section).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());

        let mut expected_start = 0;
        for span in &doc.sections {
            assert_eq!(span.rows.start, expected_start);
            assert!(span.rows.end > span.rows.start);
            expected_start = span.rows.end;
        }
        assert_eq!(expected_start, doc.height());
    }

    #[test]
    fn test_geometry_is_independent_of_state() {
        let ctx = LayoutContext::new(100, 30);
        let idle = Document::build(ctx, &PORTFOLIO, &view(Duration::ZERO));

        let mut busy = view(Duration::from_millis(1234));
        busy.mode = ThemeMode::Dark;
        busy.about = Reveal::mounted_at(Duration::from_millis(900));
        busy.projects = Reveal::SHOWN;
        busy.skills = Reveal::SHOWN;
        busy.hovered_category = Some("Backend");
        busy.hovered_project = Some("AI-Powered Task Manager");
        busy.hero.caption = PORTFOLIO.hero.caption;
        let busy = Document::build(ctx, &PORTFOLIO, &busy);

        assert_eq!(idle.geometry(), busy.geometry());
    }

    #[test]
    fn test_hero_fills_viewport() {
        let ctx = LayoutContext::new(80, 30);
        let doc = Document::build(ctx, &PORTFOLIO, &view(Duration::ZERO));
        assert_eq!(
            doc.section_rows(SectionId::Home),
            Some(0..ctx.viewport_height())
        );
    }

    #[test]
    fn test_every_hover_key_has_a_target() {
        let ctx = LayoutContext::new(120, 40);
        let doc = Document::build(ctx, &PORTFOLIO, &view(Duration::ZERO));

        for category in PORTFOLIO.skill_categories {
            assert!(doc.targets.iter().any(|t| t.target
                == HitTarget::Hover {
                    section: SectionId::Skills,
                    key: category.title
                }));
        }
        for project in PORTFOLIO.projects {
            assert!(doc.targets.iter().any(|t| t.target
                == HitTarget::Hover {
                    section: SectionId::Projects,
                    key: project.title
                }));
        }
    }

    #[test]
    fn test_targets_lie_inside_their_section() {
        let ctx = LayoutContext::new(120, 40);
        let doc = Document::build(ctx, &PORTFOLIO, &view(Duration::ZERO));

        for span in &doc.targets {
            if let HitTarget::Hover { section, .. } = span.target {
                let rows = doc.section_rows(section).unwrap();
                assert!(rows.start <= span.rect.y);
                assert!(span.rect.y + span.rect.height <= rows.end);
            }
            assert!(span.rect.x + span.rect.width <= ctx.width);
        }
    }

    #[test]
    fn test_hidden_sections_render_blank_rows() {
        let ctx = LayoutContext::new(80, 24);
        let doc = Document::build(ctx, &PORTFOLIO, &view(Duration::ZERO));
        let rows = doc.section_rows(SectionId::Projects).unwrap();

        for row in rows {
            let text = line_text(&doc.lines[usize::from(row)]);
            assert!(text.trim().is_empty(), "row {} not blank: {:?}", row, text);
        }
    }

    #[test]
    fn test_overlay_glyph_fills_only_blank_cells() {
        let ctx = LayoutContext::new(20, 10);
        let mut builder = DocumentBuilder::new(ctx, view(Duration::ZERO).palette(), Duration::ZERO);
        builder.push_at(0, vec![Span::raw("abc")]);

        let margin = ctx.margin();
        builder.overlay_glyph(0, margin + 1, "·", Color::Red);
        builder.overlay_glyph(0, margin + 5, "·", Color::Red);
        builder.overlay_glyph(3, 0, "·", Color::Red);
        let doc = builder.finish();

        let text = line_text(&doc.lines[0]);
        assert_eq!(text::width(&text), 20);
        assert_eq!(text.chars().nth(usize::from(margin) + 1), Some('b'));
        assert_eq!(text.chars().nth(usize::from(margin) + 5), Some('·'));
        let dot = doc.lines[0].spans.iter().find(|s| s.content == "·").unwrap();
        assert_eq!(dot.style.fg, Some(Color::Red));
    }

    #[test]
    fn test_geometry_section_lookup() {
        let ctx = LayoutContext::new(80, 24);
        let geometry = Document::build(ctx, &PORTFOLIO, &view(Duration::ZERO)).geometry();
        let about = geometry.section_rows(SectionId::About).unwrap();
        assert_eq!(geometry.section_at(about.start), Some(SectionId::About));
        assert_eq!(geometry.section_at(0), Some(SectionId::Home));
        assert_eq!(geometry.section_at(geometry.height), None);
    }
}
