//! Pointer interaction for the page.
//!
//! Components register hit areas in screen coordinates, and the event loop
//! hit-tests pointer events against them.

mod hit_area;

pub use hit_area::{HitArea, HitAreaRegistry};
