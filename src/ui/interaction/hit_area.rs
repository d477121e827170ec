//! Hit area system for pointer interactions.
//!
//! The page registers hover and click regions in screen coordinates after
//! every relayout or scroll. The event loop queries the registry to decide
//! which card is under the pointer and what a click does.

use ratatui::layout::Rect;

use crate::ui::document::{HitTarget, TargetSpan};

/// A pointer-sensitive region with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    /// The region in screen coordinates
    pub rect: Rect,
    pub target: HitTarget,
}

impl HitArea {
    pub fn new(rect: Rect, target: HitTarget) -> Self {
        Self { rect, target }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of the hit areas currently on screen.
///
/// Areas registered later take priority where regions overlap, so the fixed
/// header is registered after the scrolled body.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Index of the area under the pointer
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every area and the hover state.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    pub fn register(&mut self, rect: Rect, target: HitTarget) {
        if rect.width > 0 && rect.height > 0 {
            self.areas.push(HitArea::new(rect, target));
        }
    }

    /// Register document targets scrolled by `offset` rows into `body`.
    /// Targets are clipped to the body; those fully outside are skipped.
    pub fn register_document(&mut self, targets: &[TargetSpan], offset: u16, body: Rect) {
        let visible = offset..offset.saturating_add(body.height);
        for span in targets {
            let top = span.rect.y.max(visible.start);
            let bottom = (span.rect.y + span.rect.height).min(visible.end);
            if top >= bottom {
                continue;
            }
            let rect = Rect::new(
                span.rect.x,
                body.y + (top - offset),
                span.rect.width,
                bottom - top,
            );
            self.register(rect.intersection(body), span.target);
        }
    }

    /// Hide areas under an overlay spanning the top of the body.
    ///
    /// Areas overlapping `rect` keep only their rows below it; areas with
    /// nothing left are dropped.
    pub fn cover(&mut self, rect: Rect) {
        let bottom = rect.y + rect.height;
        self.areas.retain_mut(|area| {
            if area.rect.intersection(rect).is_empty() {
                return true;
            }
            let area_bottom = area.rect.y + area.rect.height;
            if area_bottom <= bottom {
                return false;
            }
            area.rect.height = area_bottom - bottom;
            area.rect.y = bottom;
            true
        });
        self.hovered = None;
    }

    /// Topmost target at the given position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.find_index(x, y).map(|index| self.areas[index].target)
    }

    /// Update the hover state from the pointer position.
    ///
    /// Returns true if the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let hovered = self.find_index(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// The pointer left the terminal.
    pub fn clear_hover(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    /// Target under the pointer, if any.
    pub fn hovered(&self) -> Option<HitTarget> {
        self.hovered
            .and_then(|index| self.areas.get(index))
            .map(|area| area.target)
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionId;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    fn hover(key: &'static str) -> HitTarget {
        HitTarget::Hover {
            section: SectionId::Skills,
            key,
        }
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), HitTarget::ToggleTheme);

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(area.contains(20, 15));

        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10));
        assert!(!area.contains(10, 20));
    }

    #[test]
    fn test_zero_size_areas_are_ignored() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(5, 5, 0, 3), HitTarget::ToggleTheme);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_hit_test_prefers_last_registered() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 20, 20), hover("Backend"));
        registry.register(make_rect(5, 5, 10, 10), HitTarget::Jump(SectionId::About));

        assert_eq!(registry.hit_test(10, 10), Some(HitTarget::Jump(SectionId::About)));
        assert_eq!(registry.hit_test(2, 2), Some(hover("Backend")));
        assert_eq!(registry.hit_test(30, 30), None);
    }

    #[test]
    fn test_update_hover_returns_changed() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), hover("Frontend"));
        registry.register(make_rect(20, 0, 10, 10), hover("Backend"));

        assert!(registry.update_hover(5, 5));
        assert!(!registry.update_hover(8, 8));
        assert_eq!(registry.hovered(), Some(hover("Frontend")));

        assert!(registry.update_hover(25, 5));
        assert!(registry.update_hover(100, 100));
        assert!(!registry.update_hover(200, 200));
        assert_eq!(registry.hovered(), None);

        registry.update_hover(5, 5);
        assert!(registry.clear_hover());
        assert!(!registry.clear_hover());
    }

    #[test]
    fn test_document_targets_scroll_and_clip() {
        let body = make_rect(0, 2, 80, 10);
        let targets = [
            TargetSpan {
                target: hover("above"),
                rect: make_rect(4, 0, 10, 3),
            },
            TargetSpan {
                target: hover("straddling"),
                rect: make_rect(4, 18, 10, 6),
            },
            TargetSpan {
                target: hover("below"),
                rect: make_rect(4, 40, 10, 3),
            },
        ];

        let mut registry = HitAreaRegistry::new();
        registry.register_document(&targets, 15, body);

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.areas()[0],
            HitArea::new(make_rect(4, 5, 10, 6), hover("straddling"))
        );

        registry.clear();
        registry.register_document(&targets, 20, body);
        assert_eq!(registry.areas()[0].rect, make_rect(4, 2, 10, 4));
    }

    #[test]
    fn test_cover_trims_areas_under_overlay() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(4, 2, 10, 3), hover("hidden"));
        registry.register(make_rect(4, 5, 10, 6), hover("straddling"));
        registry.register(make_rect(4, 12, 10, 2), hover("clear"));
        registry.update_hover(5, 13);

        registry.cover(make_rect(0, 2, 80, 7));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.areas()[0].rect, make_rect(4, 9, 10, 2));
        assert_eq!(registry.areas()[1].rect, make_rect(4, 12, 10, 2));
        assert_eq!(registry.hit_test(5, 3), None);
        assert_eq!(registry.hovered(), None, "indices shift, hover is recomputed");
    }
}
