//! Scroll-triggered reveals driven through the app.

mod common;

use std::time::Duration;

use common::{buffer_text, draw, run_for, TestAppBuilder};
use folio::app::AppEvent;
use folio::content::{SectionId, PORTFOLIO};
use folio::startup::Config;
use folio::ui::entrance::Reveal;

#[test]
fn test_sections_below_the_fold_start_hidden() {
    let (app, _) = TestAppBuilder::new().build();
    assert_eq!(app.page_view().about, Reveal::HIDDEN);
    assert_eq!(app.page_view().projects, Reveal::HIDDEN);
    assert_eq!(app.page_view().skills, Reveal::HIDDEN);
}

#[test]
fn test_scrolling_reveals_with_timestamp() {
    let (mut app, _) = TestAppBuilder::new().build();
    run_for(&mut app, Duration::from_millis(480));
    let scrolled_at = app.now();

    app.handle_event(AppEvent::ScrollTo(SectionId::About));
    assert_eq!(app.page_view().about, Reveal::mounted_at(scrolled_at));
    assert_eq!(app.page_view().projects, Reveal::HIDDEN);
}

#[test]
fn test_reveal_is_latched_after_scrolling_away() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.handle_event(AppEvent::ScrollTo(SectionId::Projects));
    let revealed = app.page_view().projects;
    assert!(revealed.revealed);

    run_for(&mut app, Duration::from_secs(1));
    app.handle_event(AppEvent::ScrollTo(SectionId::Home));
    run_for(&mut app, Duration::from_secs(1));
    app.handle_event(AppEvent::ScrollTo(SectionId::Projects));

    assert_eq!(app.page_view().projects, revealed);
    assert!(!app.reveals().is_observing("projects"));
}

#[test]
fn test_wheel_scrolling_reveals_incrementally() {
    let (mut app, _) = TestAppBuilder::new().build();
    let about = app.geometry().section_rows(SectionId::About).unwrap();
    let viewport = app.layout().viewport_height();

    // Bottom of the viewport just touches the section
    while app.scroll_offset() + viewport <= about.start {
        app.handle_event(AppEvent::Scroll(1));
    }
    let basis = (about.end - about.start).min(viewport);
    let needed = (f32::from(basis) * app.config.reveal_threshold).ceil() as u16;
    assert!(needed > 1);
    assert!(!app.page_view().about.revealed);

    for _ in 0..needed {
        app.handle_event(AppEvent::Scroll(1));
    }
    assert!(app.page_view().about.revealed);
}

#[test]
fn test_small_terminals_reveal_every_section_on_the_way_down() {
    for (width, height) in [(40, 10), (30, 8)] {
        let (mut app, _) = TestAppBuilder::new().with_size(width, height).build();
        while app.scroll_offset() < app.max_scroll() {
            app.handle_event(AppEvent::Scroll(1));
        }

        let view = app.page_view();
        assert!(view.about.revealed, "about hidden at {}x{}", width, height);
        assert!(view.projects.revealed, "projects hidden at {}x{}", width, height);
        assert!(view.skills.revealed, "skills hidden at {}x{}", width, height);
    }
}

#[test]
fn test_observation_disabled_shows_content_without_animation() {
    let config = Config::default().with_observe_viewport(false);
    let (app, _) = TestAppBuilder::new().with_config(config).build();

    assert_eq!(app.page_view().about, Reveal::SHOWN);
    assert_eq!(app.page_view().skills, Reveal::SHOWN);
}

#[test]
fn test_revealed_content_renders_after_entrance() {
    let (mut app, _) = TestAppBuilder::new().with_size(100, 40).build();
    app.handle_event(AppEvent::ScrollTo(SectionId::About));
    run_for(&mut app, Duration::from_secs(4));

    let text = buffer_text(&draw(&app));
    assert!(text.contains("About Me"));
    assert!(text.contains(PORTFOLIO.about.greeting));
}
