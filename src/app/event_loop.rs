//! The frame loop: redraw when dirty, feed frame ticks and terminal events.

use std::io;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::time::MissedTickBehavior;

use super::{event_from_terminal, App, AppEvent};
use crate::ui;

/// Run the page until it quits or `events` ends.
///
/// Frame ticks keep their cadence regardless of the input rate.
pub async fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App, mut events: S) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let period = app.config.frame_interval.max(Duration::from_millis(1));
    let mut frames = tokio::time::interval(period);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            // Frame timer drives typewriter ticks, caret blink and entrances
            _ = frames.tick() => {
                let now = Instant::now();
                app.handle_event(AppEvent::Tick(now.duration_since(last_tick)));
                last_tick = now;
            }

            event_result = events.next() => {
                match event_result {
                    Some(Ok(event)) => {
                        if let Some(event) = event_from_terminal(&event) {
                            app.handle_event(event);
                        }
                    }
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
