//! Bordered cards for projects and skill categories.
//!
//! A card renders to rows of exactly `width` columns. Hovered cards lift by
//! one row inside a slot one row taller than the card, leaving a shadow
//! underneath; the slot height never changes.

use std::collections::HashMap;

use ratatui::style::{Color, Style};
use ratatui::text::Span;

use super::document::spans_width;
use super::text;

/// A decoration drawn over one border cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spark {
    pub glyph: char,
    pub color: Color,
}

/// Card under construction.
#[derive(Debug, Clone)]
pub struct Card {
    width: u16,
    border: Color,
    fill: Color,
    rows: Vec<Vec<Span<'static>>>,
    badge: Vec<Span<'static>>,
    sparks: HashMap<(u16, u16), Spark>,
}

impl Card {
    /// Create a card `width` columns wide (at least 5).
    pub fn new(width: u16, border: Color, fill: Color) -> Self {
        Self {
            width: width.max(5),
            border,
            fill,
            rows: Vec::new(),
            badge: Vec::new(),
            sparks: HashMap::new(),
        }
    }

    /// Columns available for content.
    pub fn inner_width(&self) -> u16 {
        self.width - 4
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Rows including borders.
    pub fn height(&self) -> u16 {
        u16::try_from(self.rows.len() + 2).unwrap_or(u16::MAX)
    }

    /// Append a content row, left aligned.
    pub fn row(&mut self, spans: Vec<Span<'static>>) {
        self.rows.push(spans);
    }

    /// Append a content row centered in the card.
    pub fn centered(&mut self, spans: Vec<Span<'static>>) {
        let pad = text::center_offset(spans_width(&spans), self.inner_width());
        let mut row = Vec::with_capacity(spans.len() + 1);
        if pad > 0 {
            row.push(Span::raw(" ".repeat(usize::from(pad))));
        }
        row.extend(spans);
        self.rows.push(row);
    }

    /// Append an empty content row.
    pub fn blank(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Append a horizontal rule across the content.
    pub fn rule(&mut self, color: Color) {
        let rule = "─".repeat(usize::from(self.inner_width()));
        self.rows.push(vec![Span::styled(rule, Style::default().fg(color))]);
    }

    /// Label drawn into the top border, right aligned.
    pub fn badge(&mut self, spans: Vec<Span<'static>>) {
        self.badge = spans;
    }

    /// Draw `spark` over the border cell at `(column, row)`. Cells inside the
    /// card are ignored.
    pub fn spark(&mut self, column: u16, row: u16, spark: Spark) {
        let on_border =
            row == 0 || row + 1 == self.height() || column == 0 || column + 1 == self.width;
        if on_border && column < self.width && row < self.height() {
            self.sparks.insert((column, row), spark);
        }
    }

    /// Render the card rows.
    pub fn render(&self) -> Vec<Vec<Span<'static>>> {
        let height = self.height();
        let mut out = Vec::with_capacity(usize::from(height));
        out.push(self.top_border());
        for (index, content) in self.rows.iter().enumerate() {
            let row = u16::try_from(index + 1).unwrap_or(u16::MAX);
            out.push(self.content_row(row, content));
        }
        out.push(self.edge_row(height - 1, '╰', '╯'));
        out
    }

    /// Render the card in a slot one row taller, lifted when `lifted`.
    pub fn render_slot(&self, lifted: bool, shadow: Color) -> Vec<Vec<Span<'static>>> {
        let spacer = vec![Span::raw(" ".repeat(usize::from(self.width)))];
        let mut rows = self.render();
        if lifted {
            rows.push(vec![
                Span::raw(" "),
                Span::styled(
                    "▔".repeat(usize::from(self.width - 2)),
                    Style::default().fg(shadow),
                ),
                Span::raw(" "),
            ]);
        } else {
            rows.insert(0, spacer);
        }
        rows
    }

    fn border_cell(&self, column: u16, row: u16, glyph: char) -> Span<'static> {
        let base = Style::default().bg(self.fill);
        match self.sparks.get(&(column, row)) {
            Some(spark) => Span::styled(spark.glyph.to_string(), base.fg(spark.color)),
            None => Span::styled(glyph.to_string(), base.fg(self.border)),
        }
    }

    fn top_border(&self) -> Vec<Span<'static>> {
        let badge_width = spans_width(&self.badge);
        if badge_width == 0 || badge_width + 4 > self.width {
            return self.edge_row(0, '╭', '╮');
        }

        // Badge sits one cell left of the corner
        let badge_start = self.width - 2 - badge_width;
        let mut spans = Vec::new();
        for column in 0..badge_start {
            let glyph = if column == 0 { '╭' } else { '─' };
            spans.push(self.border_cell(column, 0, glyph));
        }
        let base = Style::default().bg(self.fill);
        spans.extend(
            self.badge
                .iter()
                .map(|span| Span::styled(span.content.clone(), base.patch(span.style))),
        );
        spans.push(self.border_cell(self.width - 2, 0, '─'));
        spans.push(self.border_cell(self.width - 1, 0, '╮'));
        spans
    }

    fn edge_row(&self, row: u16, left: char, right: char) -> Vec<Span<'static>> {
        (0..self.width)
            .map(|column| {
                let glyph = if column == 0 {
                    left
                } else if column + 1 == self.width {
                    right
                } else {
                    '─'
                };
                self.border_cell(column, row, glyph)
            })
            .collect()
    }

    fn content_row(&self, row: u16, content: &[Span<'static>]) -> Vec<Span<'static>> {
        let fill = Style::default().bg(self.fill);
        let mut spans = vec![self.border_cell(0, row, '│'), Span::styled(" ", fill)];
        spans.extend(fit_spans(content, self.inner_width(), fill));
        spans.push(Span::styled(" ", fill));
        spans.push(self.border_cell(self.width - 1, row, '│'));
        spans
    }
}

/// Clip or pad `spans` to exactly `width` columns, painting `base` under
/// every span.
pub fn fit_spans(spans: &[Span<'static>], width: u16, base: Style) -> Vec<Span<'static>> {
    let mut out = Vec::with_capacity(spans.len() + 1);
    let mut used = 0u16;
    for span in spans {
        if used >= width {
            break;
        }
        let style = base.patch(span.style);
        let span_width = text::width(&span.content);
        if used.saturating_add(span_width) <= width {
            used += span_width;
            out.push(Span::styled(span.content.clone(), style));
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
    out
}

/// Index of the border cell `position` steps clockwise from the top-left
/// corner, as `(column, row)`.
pub fn perimeter_cell(position: usize, width: u16, height: u16) -> (u16, u16) {
    let w = usize::from(width.max(2));
    let h = usize::from(height.max(2));
    let perimeter = 2 * (w + h) - 4;
    let p = position % perimeter;

    let (column, row) = if p < w {
        (p, 0)
    } else if p < w + h - 2 {
        (w - 1, 1 + (p - w))
    } else if p < 2 * w + h - 2 {
        (w - 1 - (p - (w + h - 2)), h - 1)
    } else {
        (0, h - 2 - (p - (2 * w + h - 2)))
    };
    (column as u16, row as u16)
}
