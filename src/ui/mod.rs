//! UI rendering for the portfolio page.
//!
//! The screen is split into three fixed regions:
//! - Header with initials, section nav and the theme toggle
//! - Body showing the scrolled page document
//! - Bottom: key hints and theme status
//!
//! On narrow terminals the navigation drawer is drawn over the top of the
//! body while it is open or sliding.
//!
//! ## Responsive Layout System
//!
//! Every builder receives a `LayoutContext` holding the terminal size. It
//! decides the content column width, the skill grid columns and whether the
//! header has room for nav labels. Section heights depend only on the
//! layout, so the geometry the app uses for scrolling and viewport
//! observation matches what is drawn.

pub mod card;
pub mod document;
pub mod entrance;
pub mod header;
pub mod interaction;
pub mod layout;
pub mod menu;
pub mod particles;
pub mod sections;
pub mod text;
pub mod theme;

pub use layout::{breakpoints, LayoutContext};

use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::App;
use document::Document;
use header::{build_header, build_hints};
use menu::{build_menu, menu_area, visible_rows};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole page for the current app state
pub fn render(frame: &mut Frame, app: &App) {
    let ctx = app.layout();
    let view = app.page_view();
    let palette = view.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        frame.area(),
    );

    let document = Document::build(ctx, app.portfolio(), &view);
    frame.render_widget(
        Paragraph::new(document.lines).scroll((view.scroll_offset, 0)),
        ctx.body(),
    );

    if !ctx.shows_nav() && view.menu.openness > 0.0 {
        let area = menu_area(ctx.body());
        let rows = visible_rows(area, view.menu.openness);
        let drawer = build_menu(area, &view, app.hovered_target());
        frame.render_widget(
            Paragraph::new(drawer.lines),
            ratatui::layout::Rect::new(area.x, area.y, area.width, rows),
        );
    }

    let header = build_header(
        ctx.header(),
        app.portfolio(),
        &view,
        app.active_section(),
        app.hovered_target(),
    );
    frame.render_widget(Paragraph::new(header.lines), ctx.header());
    frame.render_widget(Paragraph::new(build_hints(&ctx, &view)), ctx.hints());
}

/// Page snapshot for render tests: light system theme, hero shown with a
/// partial caption, scrolled sections still hidden.
#[cfg(test)]
pub(crate) fn sample_view(now: std::time::Duration) -> document::PageView<'static> {
    use crate::content::PORTFOLIO;
    use crate::engine::{ThemeMode, ThemeSource};
    use document::{HeroSnapshot, MenuSnapshot, PageView};
    use entrance::Reveal;
    use particles::NO_PARTICLES;

    PageView {
        mode: ThemeMode::Light,
        source: ThemeSource::SystemDefault,
        now,
        scroll_offset: 0,
        hero: HeroSnapshot {
            caption: "Full Stack",
            full_caption: PORTFOLIO.hero.caption,
            caret_visible: true,
            intro: Reveal::SHOWN,
            particles: &NO_PARTICLES,
        },
        about: Reveal::HIDDEN,
        projects: Reveal::HIDDEN,
        hovered_project: None,
        skills: Reveal::HIDDEN,
        hovered_category: None,
        footer: Reveal::SHOWN,
        menu: MenuSnapshot::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app;
    use crate::app::AppEvent;
    use crate::content::{SectionId, PORTFOLIO};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::time::Duration;

    fn buffer_row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| buffer_row(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &App) -> Buffer {
        let ctx = app.layout();
        let backend = TestBackend::new(ctx.width, ctx.height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_render_first_screen() {
        let mut app = app((100, 30));
        for _ in 0..200 {
            app.handle_event(AppEvent::Tick(Duration::from_millis(16)));
        }
        let buffer = draw(&app);
        let text = buffer_text(&buffer);

        assert!(buffer_row(&buffer, 0).contains("PN"));
        assert!(buffer_row(&buffer, 0).contains("Projects"));
        assert!(text.contains(PORTFOLIO.hero.name));
        assert!(buffer_row(&buffer, 29).contains("theme: light (system)"));
    }

    #[test]
    fn test_render_follows_scroll() {
        let mut app = app((100, 30));
        app.handle_event(AppEvent::ScrollTo(SectionId::Contact));
        for _ in 0..300 {
            app.handle_event(AppEvent::Tick(Duration::from_millis(16)));
        }
        let text = buffer_text(&draw(&app));
        assert!(text.contains(PORTFOLIO.footer.copyright));
        assert_ne!(app.active_section(), Some(SectionId::Home));
    }

    #[test]
    fn test_render_dark_theme_background() {
        let mut app = app((80, 24));
        app.handle_event(AppEvent::ToggleTheme);
        let buffer = draw(&app);
        let palette = app.page_view().palette();
        assert_eq!(buffer[(0, 5)].bg, palette.hero_bg);
        assert!(buffer_row(&buffer, 23).contains("dark (saved)"));
    }

    #[test]
    fn test_render_open_menu_over_body() {
        let mut app = app((40, 24));
        app.handle_event(AppEvent::ToggleMenu);
        for _ in 0..20 {
            app.handle_event(AppEvent::Tick(Duration::from_millis(16)));
        }
        let buffer = draw(&app);
        assert!(buffer_row(&buffer, 0).contains("[ × ]"));
        for (row, section) in SectionId::ALL.into_iter().enumerate() {
            assert!(buffer_row(&buffer, 2 + row as u16).contains(section.label()));
        }
        assert!(buffer_row(&buffer, 7).contains("Resume"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        for (width, height) in [(1, 1), (10, 3), (20, 5)] {
            let mut app = app((width, height));
            draw(&app);
            app.handle_event(AppEvent::ToggleMenu);
            app.handle_event(AppEvent::Tick(Duration::from_millis(300)));
            draw(&app);
        }
    }
}
