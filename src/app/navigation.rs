//! Scrolling and section jumps for the App.

use tracing::debug;

use super::{apply_geometry, measure, App};
use crate::content::SectionId;
use crate::ui::document::HitTarget;
use crate::ui::layout::LayoutContext;

impl App {
    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u16 {
        self.geometry
            .height
            .saturating_sub(self.layout.viewport_height())
    }

    /// First visible document row.
    pub fn scroll_offset(&self) -> u16 {
        self.viewport.offset()
    }

    /// Scroll by `rows` (negative is up), clamped to the page.
    pub fn scroll_by(&mut self, rows: i32) {
        let target = i32::from(self.scroll_offset()).saturating_add(rows);
        let clamped = target.clamp(0, i32::from(self.max_scroll()));
        self.set_scroll(u16::try_from(clamped).unwrap_or(0));
    }

    /// Scroll by whole pages, keeping two rows of context.
    pub fn scroll_page(&mut self, pages: i32) {
        let page = i32::from(self.layout.viewport_height().saturating_sub(2).max(1));
        self.scroll_by(pages.saturating_mul(page));
    }

    /// Jump so `section` starts at the top of the viewport.
    ///
    /// The jump is instant. Sections near the bottom stop at the last page.
    pub fn scroll_to(&mut self, section: SectionId) {
        let Some(rows) = self.geometry.section_rows(section) else {
            return;
        };
        debug!(?section, row = rows.start, "Jump to section");
        self.set_scroll(rows.start.min(self.max_scroll()));
    }

    /// Jump to the bottom of the page.
    pub fn scroll_to_end(&mut self) {
        self.set_scroll(self.max_scroll());
    }

    /// Lay the page out again for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = LayoutContext::new(width, height);
        if self.layout.shows_nav() {
            self.menu.dismiss();
        }
        self.geometry = measure(self.layout, self.portfolio);
        apply_geometry(&mut self.viewport, &self.geometry, self.layout);
        let offset = self.scroll_offset().min(self.max_scroll());
        self.viewport.set_offset(offset);
        self.after_scroll();
    }

    fn set_scroll(&mut self, offset: u16) {
        if offset == self.scroll_offset() {
            return;
        }
        self.viewport.set_offset(offset);
        self.after_scroll();
    }

    /// Report visibility, then move hit areas with the page.
    fn after_scroll(&mut self) {
        self.sync_viewport();
        self.refresh_pointer();
    }

    /// Rebuild hit areas and re-target the pointer at whatever now sits
    /// under it.
    pub(super) fn refresh_pointer(&mut self) {
        let previous = self.hit_areas.hovered();
        self.rebuild_hit_areas();

        let next = self.pointer.and_then(|(x, y)| {
            self.hit_areas.update_hover(x, y);
            self.hit_areas.hovered()
        });
        self.apply_hover(previous, next);
        self.mark_dirty();
    }

    /// Move hover state from `previous` to `next`: leave first, then enter.
    pub(super) fn apply_hover(&mut self, previous: Option<HitTarget>, next: Option<HitTarget>) {
        if previous == next {
            return;
        }
        if let Some(HitTarget::Hover { section, key }) = previous {
            if let Some(view) = self.hover_section_mut(section) {
                view.leave(key);
            }
        }
        if let Some(HitTarget::Hover { section, key }) = next {
            if let Some(view) = self.hover_section_mut(section) {
                view.enter(key);
            }
        }
        self.mark_dirty();
    }

    fn hover_section_mut(&mut self, section: SectionId) -> Option<&mut super::HoverSection> {
        match section {
            SectionId::Projects => Some(&mut self.projects),
            SectionId::Skills => Some(&mut self.skills),
            _ => None,
        }
    }
}
