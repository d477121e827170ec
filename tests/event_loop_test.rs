//! The frame loop against a scripted terminal event stream.

mod common;

use std::io;
use std::time::Duration;

use common::TestAppBuilder;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use folio::app::run_app;
use futures::stream::{self, Stream};
use futures::StreamExt;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn pointer_motion(count: u16, every: Duration) -> impl Stream<Item = io::Result<Event>> {
    stream::unfold(0u16, move |n| async move {
        if n >= count {
            return None;
        }
        tokio::time::sleep(every).await;
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: n % 80,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        Some((Ok(event), n + 1))
    })
}

#[tokio::test]
async fn test_ticks_keep_running_during_pointer_sweep() {
    let (mut app, _) = TestAppBuilder::new().with_size(80, 24).build();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    let events = Box::pin(pointer_motion(150, Duration::from_millis(2)));
    run_app(&mut terminal, &mut app, events).await.unwrap();

    assert!(
        app.now() >= Duration::from_millis(100),
        "clock stalled at {:?}",
        app.now()
    );
    assert!(!app.page_view().hero.caption.is_empty());
}

#[tokio::test]
async fn test_quit_key_ends_loop() {
    let (mut app, _) = TestAppBuilder::new().with_size(80, 24).build();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    let events = stream::iter(vec![Ok::<Event, io::Error>(quit)]).chain(stream::pending());
    run_app(&mut terminal, &mut app, Box::pin(events)).await.unwrap();

    assert!(app.should_quit);
}
