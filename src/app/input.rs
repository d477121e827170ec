//! Terminal event translation.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::AppEvent;
use crate::content::SectionId;

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

/// Translate a terminal event. Events the page ignores map to `None`.
pub fn event_from_terminal(event: &Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => event_from_key(key),
        Event::Mouse(mouse) => event_from_mouse(mouse),
        Event::Resize(width, height) => Some(AppEvent::Resize(*width, *height)),
        Event::FocusLost => Some(AppEvent::PointerLeft),
        _ => None,
    }
}

fn event_from_key(key: &KeyEvent) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppEvent::Quit),
            KeyCode::Char('d') => Some(AppEvent::ScrollPage(1)),
            KeyCode::Char('u') => Some(AppEvent::ScrollPage(-1)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(AppEvent::Quit),
        KeyCode::Esc => Some(AppEvent::Dismiss),
        KeyCode::Char('m') => Some(AppEvent::ToggleMenu),
        KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::Scroll(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::Scroll(-1)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(AppEvent::ScrollPage(1)),
        KeyCode::PageUp => Some(AppEvent::ScrollPage(-1)),
        KeyCode::Home | KeyCode::Char('g') => Some(AppEvent::ScrollTo(SectionId::Home)),
        KeyCode::End | KeyCode::Char('G') => Some(AppEvent::ScrollToEnd),
        KeyCode::Char('t') => Some(AppEvent::ToggleTheme),
        KeyCode::Char('r') => Some(AppEvent::ResetTheme),
        KeyCode::Char('c') => Some(AppEvent::RestartTypewriter),
        KeyCode::Char(digit) => SectionId::from_digit(digit).map(AppEvent::ScrollTo),
        _ => None,
    }
}

fn event_from_mouse(mouse: &MouseEvent) -> Option<AppEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(AppEvent::PointerMoved { x, y }),
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click { x, y }),
        MouseEventKind::ScrollDown => Some(AppEvent::Scroll(WHEEL_ROWS)),
        MouseEventKind::ScrollUp => Some(AppEvent::Scroll(-WHEEL_ROWS)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(event_from_terminal(&key(KeyCode::Char('j'))), Some(AppEvent::Scroll(1)));
        assert_eq!(event_from_terminal(&key(KeyCode::Up)), Some(AppEvent::Scroll(-1)));
        assert_eq!(event_from_terminal(&key(KeyCode::PageDown)), Some(AppEvent::ScrollPage(1)));
        assert_eq!(event_from_terminal(&key(KeyCode::End)), Some(AppEvent::ScrollToEnd));
        assert_eq!(
            event_from_terminal(&key(KeyCode::Char('3'))),
            Some(AppEvent::ScrollTo(SectionId::Projects))
        );
        assert_eq!(event_from_terminal(&key(KeyCode::Char('9'))), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(event_from_terminal(&key(KeyCode::Char('t'))), Some(AppEvent::ToggleTheme));
        assert_eq!(event_from_terminal(&key(KeyCode::Char('r'))), Some(AppEvent::ResetTheme));
        assert_eq!(
            event_from_terminal(&key(KeyCode::Char('c'))),
            Some(AppEvent::RestartTypewriter)
        );
        assert_eq!(event_from_terminal(&key(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(event_from_terminal(&key(KeyCode::Char('m'))), Some(AppEvent::ToggleMenu));
        assert_eq!(event_from_terminal(&key(KeyCode::Esc)), Some(AppEvent::Dismiss));
    }

    #[test]
    fn test_ctrl_c_quits_instead_of_retyping() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(event_from_terminal(&event), Some(AppEvent::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(event_from_terminal(&event), None);
    }

    #[test]
    fn test_mouse_events() {
        assert_eq!(
            event_from_terminal(&mouse(MouseEventKind::Moved)),
            Some(AppEvent::PointerMoved { x: 7, y: 3 })
        );
        assert_eq!(
            event_from_terminal(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(AppEvent::Click { x: 7, y: 3 })
        );
        assert_eq!(
            event_from_terminal(&mouse(MouseEventKind::ScrollDown)),
            Some(AppEvent::Scroll(3))
        );
        assert_eq!(event_from_terminal(&mouse(MouseEventKind::Down(MouseButton::Right))), None);
    }

    #[test]
    fn test_resize_and_focus() {
        assert_eq!(event_from_terminal(&Event::Resize(90, 30)), Some(AppEvent::Resize(90, 30)));
        assert_eq!(event_from_terminal(&Event::FocusLost), Some(AppEvent::PointerLeft));
        assert_eq!(event_from_terminal(&Event::FocusGained), None);
    }
}
