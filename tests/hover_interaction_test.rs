//! Pointer hover over project and skill cards.

mod common;

use common::TestAppBuilder;
use folio::app::{App, AppEvent};
use folio::content::SectionId;
use folio::ui::document::HitTarget;

fn center_of(app: &App, section: SectionId, key: &str) -> Option<(u16, u16)> {
    app.hit_areas()
        .areas()
        .iter()
        .find(|area| matches!(area.target, HitTarget::Hover { section: s, key: k } if s == section && k == key))
        .map(|area| (area.rect.x + area.rect.width / 2, area.rect.y + area.rect.height / 2))
}

#[test]
fn test_moving_between_cards_keeps_one_active() {
    let (mut app, _) = TestAppBuilder::new().with_size(120, 40).build();
    app.handle_event(AppEvent::ScrollTo(SectionId::Skills));

    let (fx, fy) = center_of(&app, SectionId::Skills, "Frontend").unwrap();
    let (bx, by) = center_of(&app, SectionId::Skills, "Backend").unwrap();

    app.handle_event(AppEvent::PointerMoved { x: fx, y: fy });
    app.handle_event(AppEvent::PointerMoved { x: bx, y: by });
    assert_eq!(app.skills().hovered(), Some("Backend"));
    assert!(!app.skills().is_amplified("Frontend"));
    assert!(app.skills().is_amplified("Backend"));
}

#[test]
fn test_pointer_off_cards_clears_hover() {
    let (mut app, _) = TestAppBuilder::new().with_size(120, 40).build();
    app.handle_event(AppEvent::ScrollTo(SectionId::Skills));
    let (x, y) = center_of(&app, SectionId::Skills, "Frontend").unwrap();

    app.handle_event(AppEvent::PointerMoved { x, y });
    assert_eq!(app.page_view().hovered_category, Some("Frontend"));

    app.handle_event(AppEvent::PointerMoved { x: 0, y: 1 });
    assert_eq!(app.page_view().hovered_category, None);

    app.handle_event(AppEvent::PointerMoved { x, y });
    app.handle_event(AppEvent::PointerLeft);
    assert_eq!(app.page_view().hovered_category, None);
}

#[test]
fn test_project_and_skill_hover_are_independent() {
    let (mut app, _) = TestAppBuilder::new().with_size(120, 40).build();
    app.handle_event(AppEvent::ScrollTo(SectionId::Projects));

    let project = app.portfolio().projects[0].title;
    let (x, y) = center_of(&app, SectionId::Projects, project).unwrap();
    app.handle_event(AppEvent::PointerMoved { x, y });
    assert_eq!(app.projects().hovered(), Some(project));
    assert_eq!(app.skills().hovered(), None);

    app.handle_event(AppEvent::PointerLeft);
    assert_eq!(app.projects().hovered(), None);
}

#[test]
fn test_clicking_a_card_does_nothing() {
    let (mut app, _) = TestAppBuilder::new().with_size(120, 40).build();
    app.handle_event(AppEvent::ScrollTo(SectionId::Skills));
    let offset = app.scroll_offset();
    let mode = app.page_view().mode;

    let (x, y) = center_of(&app, SectionId::Skills, "Frontend").unwrap();
    app.handle_event(AppEvent::Click { x, y });
    assert_eq!(app.scroll_offset(), offset);
    assert_eq!(app.page_view().mode, mode);
}
