//! Section views and the engine components they mount.
//!
//! A view owns its component instances and nothing else. Dropping a view
//! releases what it holds: the hero's typewriter lease goes with it, and
//! reveal observations are released through the tracker on teardown.

use std::time::Duration;

use tracing::debug;

use crate::content::SectionId;
use crate::engine::{
    CaretBlink, HoverInteractionState, RevealHandle, TimerId, TimerQueue, TypewriterEngine,
    ViewportRevealTracker,
};
use crate::error::EngineResult;
use crate::traits::IntersectionObserver;
use crate::ui::document::{HeroSnapshot, MenuSnapshot};
use crate::ui::entrance::Reveal;
use crate::ui::particles::{ParticleCell, ParticleField};

/// Time the menu drawer takes to open or close.
pub const MENU_SLIDE: Duration = Duration::from_millis(200);

/// Hero section: typewriter caption, caret, background particles and the
/// mount-time entrance.
#[derive(Debug)]
pub struct HeroView {
    typewriter: TypewriterEngine,
    caret: CaretBlink,
    particles: ParticleField,
    mounted_at: Duration,
    interval_ms: u64,
}

impl HeroView {
    /// Mount the hero and start typing `caption`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `interval_ms` is zero.
    pub fn mount(timers: &TimerQueue, caption: &str, interval_ms: u64) -> EngineResult<Self> {
        let now = timers.now();
        let mut typewriter = TypewriterEngine::new();
        typewriter.start(timers, caption, interval_ms)?;

        let mut caret = CaretBlink::new();
        caret.reset(now);
        Ok(Self {
            typewriter,
            caret,
            particles: ParticleField::empty(),
            mounted_at: now,
            interval_ms,
        })
    }

    /// Draw `particles` behind the hero.
    pub fn with_particles(mut self, particles: ParticleField) -> Self {
        self.particles = particles;
        self
    }

    /// Type the caption again from the start.
    pub fn restart(&mut self, timers: &TimerQueue) -> EngineResult<()> {
        let caption = self.typewriter.full_text().to_string();
        self.typewriter.start(timers, caption, self.interval_ms)?;
        self.caret.reset(timers.now());
        Ok(())
    }

    /// Route a timer fire. Returns `true` if the caption changed.
    pub fn on_timer(&mut self, id: TimerId, now: Duration) -> bool {
        if self.typewriter.on_timer(id).is_some() {
            self.caret.reset(now);
            true
        } else {
            false
        }
    }

    /// Advance the caret blink. Returns `true` if it toggled.
    pub fn update_caret(&mut self, now: Duration) -> bool {
        self.caret.update(now)
    }

    pub fn typewriter(&self) -> &TypewriterEngine {
        &self.typewriter
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Particle cells at `now` over a hero of `width` x `height`.
    pub fn particle_cells(&self, now: Duration, width: u16, height: u16) -> Vec<ParticleCell> {
        self.particles.cells(now, width, height)
    }

    pub fn mounted_at(&self) -> Duration {
        self.mounted_at
    }

    /// Intro entrance, starting at mount.
    pub fn intro(&self) -> Reveal {
        Reveal::mounted_at(self.mounted_at)
    }

    pub fn snapshot(&self) -> HeroSnapshot<'_> {
        HeroSnapshot {
            caption: self.typewriter.revealed_text(),
            full_caption: self.typewriter.full_text(),
            caret_visible: self.caret.is_visible(),
            intro: self.intro(),
            particles: &self.particles,
        }
    }
}

/// Open/closed state of the narrow-layout navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    /// When the drawer last opened or closed
    changed_at: Option<Duration>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer. Returns the new open state.
    pub fn toggle(&mut self, now: Duration) -> bool {
        self.open = !self.open;
        self.changed_at = Some(now);
        debug!(open = self.open, "Menu toggled");
        self.open
    }

    /// Close the drawer, animating it away. Returns `true` if it was open.
    pub fn close(&mut self, now: Duration) -> bool {
        if !self.open {
            return false;
        }
        self.toggle(now);
        true
    }

    /// Close without animating, for when the drawer no longer applies.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.changed_at = None;
    }

    /// How far the drawer is extended at `now`, 0.0 to 1.0.
    pub fn openness(&self, now: Duration) -> f32 {
        let target = if self.open { 1.0 } else { 0.0 };
        let Some(at) = self.changed_at else {
            return target;
        };
        let t = (now.saturating_sub(at).as_secs_f32() / MENU_SLIDE.as_secs_f32()).min(1.0);
        if self.open {
            t
        } else {
            1.0 - t
        }
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.changed_at
            .is_some_and(|at| now.saturating_sub(at) < MENU_SLIDE)
    }

    pub fn snapshot(&self, now: Duration) -> MenuSnapshot {
        MenuSnapshot {
            open: self.open,
            openness: self.openness(now),
        }
    }
}

/// A section revealed once it scrolls into view.
#[derive(Debug)]
pub struct RevealedSection {
    section: SectionId,
    handle: RevealHandle,
}

impl RevealedSection {
    /// Start observing `section`. The viewport must already know the
    /// section's rows, otherwise it fails open and shows at once.
    pub fn mount(
        tracker: &mut ViewportRevealTracker,
        observer: &mut dyn IntersectionObserver,
        section: SectionId,
        threshold: f32,
    ) -> EngineResult<Self> {
        let handle = tracker.observe(observer, section.element_id(), threshold, true)?;
        Ok(Self { section, handle })
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn is_revealed(&self) -> bool {
        self.handle.is_revealed()
    }

    pub fn reveal(&self) -> Reveal {
        Reveal::from_handle(&self.handle)
    }
}

/// A revealed section whose cards react to the pointer.
#[derive(Debug)]
pub struct HoverSection {
    reveal: RevealedSection,
    hover: HoverInteractionState<&'static str>,
}

impl HoverSection {
    pub fn mount(
        tracker: &mut ViewportRevealTracker,
        observer: &mut dyn IntersectionObserver,
        section: SectionId,
        threshold: f32,
    ) -> EngineResult<Self> {
        Ok(Self {
            reveal: RevealedSection::mount(tracker, observer, section, threshold)?,
            hover: HoverInteractionState::new(),
        })
    }

    pub fn section(&self) -> &RevealedSection {
        &self.reveal
    }

    pub fn reveal(&self) -> Reveal {
        self.reveal.reveal()
    }

    /// Pointer entered card `key`.
    pub fn enter(&mut self, key: &'static str) {
        debug!(section = ?self.reveal.section(), key, "Hover: enter");
        self.hover.enter(key);
    }

    /// Pointer left card `key`. Returns `true` if `key` was active.
    pub fn leave(&mut self, key: &'static str) -> bool {
        self.hover.leave(&key)
    }

    pub fn clear(&mut self) {
        self.hover.clear();
    }

    /// Card currently amplified.
    pub fn hovered(&self) -> Option<&'static str> {
        self.hover.active_key().copied()
    }

    pub fn is_amplified(&self, key: &'static str) -> bool {
        self.hover.is_amplified(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ManualObserver;
    use crate::content::PORTFOLIO;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn pump(timers: &TimerQueue, hero: &mut HeroView, elapsed: Duration) {
        let mut fired = Vec::new();
        timers.advance_with(elapsed, |id| fired.push(id));
        for id in fired {
            hero.on_timer(id, timers.now());
        }
    }

    #[test]
    fn test_hero_types_caption_and_restarts() {
        let timers = TimerQueue::new();
        let mut hero = HeroView::mount(&timers, "Hello", 100).unwrap();
        assert_eq!(hero.snapshot().caption, "");
        assert_eq!(hero.snapshot().full_caption, "Hello");

        pump(&timers, &mut hero, ms(300));
        assert_eq!(hero.snapshot().caption, "Hel");

        hero.restart(&timers).unwrap();
        assert_eq!(hero.snapshot().caption, "");
        pump(&timers, &mut hero, ms(500));
        assert_eq!(hero.snapshot().caption, "Hello");
        assert!(!hero.typewriter().is_running());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_dropping_hero_releases_timer() {
        let timers = TimerQueue::new();
        let hero = HeroView::mount(&timers, PORTFOLIO.hero.caption, 100).unwrap();
        assert_eq!(timers.pending(), 1);
        drop(hero);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let timers = TimerQueue::new();
        assert!(HeroView::mount(&timers, "x", 0).is_err());
    }

    #[test]
    fn test_caret_solid_while_typing() {
        let timers = TimerQueue::new();
        let mut hero = HeroView::mount(&timers, "Hello world", 100).unwrap();
        for _ in 0..10 {
            pump(&timers, &mut hero, ms(100));
            hero.update_caret(timers.now());
            assert!(hero.snapshot().caret_visible);
        }
    }

    #[test]
    fn test_hero_carries_particles() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let timers = TimerQueue::new();
        let hero = HeroView::mount(&timers, "Hello", 100).unwrap();
        assert!(hero.snapshot().particles.is_empty());

        let field = ParticleField::scatter(50, &mut StdRng::seed_from_u64(3));
        let hero = hero.with_particles(field.clone());
        assert_eq!(hero.snapshot().particles, &field);
        assert_eq!(
            hero.particle_cells(ms(4_000), 80, 20),
            field.cells(ms(4_000), 80, 20)
        );
    }

    #[test]
    fn test_menu_opens_and_closes_with_slide() {
        let mut menu = MenuState::new();
        assert!(!menu.is_open());
        assert_eq!(menu.openness(ms(0)), 0.0);

        assert!(menu.toggle(ms(1_000)));
        assert!(menu.is_animating(ms(1_100)));
        assert!((menu.openness(ms(1_100)) - 0.5).abs() < 1e-4);
        assert_eq!(menu.openness(ms(1_300)), 1.0);
        assert!(!menu.is_animating(ms(1_300)));

        assert!(menu.close(ms(2_000)));
        assert!(!menu.is_open());
        assert!((menu.openness(ms(2_050)) - 0.75).abs() < 1e-4);
        assert_eq!(menu.openness(ms(2_500)), 0.0);
        assert!(!menu.close(ms(3_000)), "already closed");
    }

    #[test]
    fn test_menu_dismiss_skips_animation() {
        let mut menu = MenuState::new();
        menu.toggle(ms(0));
        menu.dismiss();
        assert!(!menu.is_open());
        assert!(!menu.is_animating(ms(10)));
        assert_eq!(menu.openness(ms(10)), 0.0);
    }

    #[test]
    fn test_hover_section_single_active_card() {
        let mut tracker = ViewportRevealTracker::new();
        let mut observer = ManualObserver::new();
        let mut skills =
            HoverSection::mount(&mut tracker, &mut observer, SectionId::Skills, 0.1).unwrap();

        skills.enter("Frontend");
        skills.enter("Backend");
        assert_eq!(skills.hovered(), Some("Backend"));
        assert!(!skills.leave("Frontend"));
        assert!(skills.is_amplified("Backend"));
        assert!(skills.leave("Backend"));
        assert_eq!(skills.hovered(), None);
    }

    #[test]
    fn test_section_reveal_follows_handle() {
        let mut tracker = ViewportRevealTracker::new();
        let mut observer = ManualObserver::new();
        let about =
            RevealedSection::mount(&mut tracker, &mut observer, SectionId::About, 0.1).unwrap();
        assert_eq!(about.reveal(), Reveal::HIDDEN);

        let entry = observer.entry("about", 0.5, ms(700)).unwrap();
        tracker.on_intersection(&mut observer, &entry);
        assert!(about.is_revealed());
        assert_eq!(about.reveal(), Reveal::mounted_at(ms(700)));
    }
}
