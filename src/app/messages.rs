//! AppEvent enum for everything that can change the page.

use std::time::Duration;

use crate::content::SectionId;

/// Input to the app, produced by the event loop from terminal events and
/// the frame timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Frame timer fired; the host clock advanced by the given amount
    Tick(Duration),
    /// Scroll by rows (negative is up)
    Scroll(i32),
    /// Scroll by pages (negative is up)
    ScrollPage(i32),
    /// Jump to the top of a section
    ScrollTo(SectionId),
    /// Jump to the bottom of the page
    ScrollToEnd,
    /// Pointer moved to a screen cell
    PointerMoved { x: u16, y: u16 },
    /// Pointer left the page (terminal lost focus)
    PointerLeft,
    /// Left click at a screen cell
    Click { x: u16, y: u16 },
    /// Flip the theme and save the choice
    ToggleTheme,
    /// Forget the saved theme and follow the system again
    ResetTheme,
    /// Open or close the navigation drawer (narrow terminals)
    ToggleMenu,
    /// Close the drawer if open, otherwise quit
    Dismiss,
    /// Type the hero caption again
    RestartTypewriter,
    /// Terminal resized to width and height
    Resize(u16, u16),
    Quit,
}
