//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppEvent`] - Everything that can change the page
//! - [`HeroView`], [`RevealedSection`], [`HoverSection`] - Section views
//!   that own the engine components they mount
//! - [`event_from_terminal`] - Terminal event translation
//! - [`run_app`] - The frame loop
//!
//! The app is single-threaded. The event loop feeds it events one at a
//! time; each handler runs to completion and sets `needs_redraw` when the
//! visible output changed.

mod event_loop;
mod handlers;
mod input;
mod messages;
mod navigation;
mod views;

pub use event_loop::run_app;
pub use input::event_from_terminal;
pub use messages::AppEvent;
pub use views::{HeroView, HoverSection, MenuState, RevealedSection, MENU_SLIDE};

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use crate::adapters::ScrollViewport;
use crate::content::{Portfolio, SectionId, PORTFOLIO};
use crate::engine::{ThemePreferenceStore, TimerQueue, ViewportRevealTracker};
use crate::error::EngineResult;
use crate::startup::Config;
use crate::ui::document::{
    Document, DocumentGeometry, HeroSnapshot, HitTarget, MenuSnapshot, PageView,
};
use crate::ui::entrance::Reveal;
use crate::ui::header::build_header;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::LayoutContext;
use crate::ui::menu::{build_menu, menu_area};
use crate::ui::particles::{ParticleCell, ParticleField, NO_PARTICLES};

/// Main application state
pub struct App {
    pub config: Config,
    portfolio: &'static Portfolio,
    /// Theme preference, initialized at construction
    theme: ThemePreferenceStore,
    /// Timer facility driven by `AppEvent::Tick`
    timers: TimerQueue,
    /// Intersection observer over the scrolled document
    viewport: ScrollViewport,
    reveals: ViewportRevealTracker,
    hero: HeroView,
    about: RevealedSection,
    projects: HoverSection,
    skills: HoverSection,
    footer_mounted_at: Duration,
    /// Navigation drawer for narrow terminals
    menu: MenuState,
    layout: LayoutContext,
    geometry: DocumentGeometry,
    hit_areas: HitAreaRegistry,
    /// Last known pointer cell
    pointer: Option<(u16, u16)>,
    /// Set by theme and reveal subscribers
    changed: Rc<Cell<bool>>,
    /// Chevron phase at the last redraw
    last_bounce: u128,
    /// Particle cells at the last redraw
    last_particles: Vec<ParticleCell>,
    /// Drawer openness at the last redraw
    last_openness: f32,
    /// Dirty flag: the next loop iteration redraws
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    /// Create the app for a terminal of `size` (width, height).
    ///
    /// Resolves the theme, lays out the page, mounts every section and
    /// starts the hero typewriter. Sections already on screen reveal at
    /// once.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the configured typewriter interval or
    /// reveal threshold is out of range.
    pub fn new(
        config: Config,
        mut theme: ThemePreferenceStore,
        size: (u16, u16),
    ) -> EngineResult<Self> {
        let changed = Rc::new(Cell::new(false));

        let mode = theme.init();
        info!(mode = %mode, source = ?theme.source(), "Theme resolved");
        let flag = Rc::clone(&changed);
        theme.subscribe(move |state| {
            debug!(mode = %state.mode, source = ?state.source, "Theme changed");
            flag.set(true);
        });

        let mut reveals = ViewportRevealTracker::new();
        let flag = Rc::clone(&changed);
        reveals.subscribe(move |change| {
            debug!(element = %change.element_id, revealed = change.revealed, "Reveal changed");
            flag.set(true);
        });

        let mut viewport = if config.observe_viewport {
            ScrollViewport::new()
        } else {
            ScrollViewport::unavailable()
        };

        let portfolio: &'static Portfolio = &PORTFOLIO;
        let layout = LayoutContext::new(size.0, size.1);
        let geometry = measure(layout, portfolio);
        apply_geometry(&mut viewport, &geometry, layout);

        let timers = TimerQueue::new();
        let threshold = config.reveal_threshold;
        let particles = ParticleField::scatter(config.particle_count, &mut rand::thread_rng());
        let hero = HeroView::mount(&timers, portfolio.hero.caption, config.typewriter_interval_ms)?
            .with_particles(particles);
        let about =
            RevealedSection::mount(&mut reveals, &mut viewport, SectionId::About, threshold)?;
        let projects =
            HoverSection::mount(&mut reveals, &mut viewport, SectionId::Projects, threshold)?;
        let skills =
            HoverSection::mount(&mut reveals, &mut viewport, SectionId::Skills, threshold)?;

        let mut app = Self {
            config,
            portfolio,
            theme,
            timers,
            viewport,
            reveals,
            hero,
            about,
            projects,
            skills,
            footer_mounted_at: Duration::ZERO,
            menu: MenuState::new(),
            layout,
            geometry,
            hit_areas: HitAreaRegistry::new(),
            pointer: None,
            changed,
            last_bounce: 0,
            last_particles: Vec::new(),
            last_openness: 0.0,
            needs_redraw: true,
            should_quit: false,
        };
        app.sync_viewport();
        app.rebuild_hit_areas();
        Ok(app)
    }

    /// Mark the app as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Host clock reading.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn portfolio(&self) -> &'static Portfolio {
        self.portfolio
    }

    pub fn layout(&self) -> LayoutContext {
        self.layout
    }

    pub fn geometry(&self) -> &DocumentGeometry {
        &self.geometry
    }

    pub fn theme(&self) -> &ThemePreferenceStore {
        &self.theme
    }

    pub fn hero(&self) -> &HeroView {
        &self.hero
    }

    pub fn about(&self) -> &RevealedSection {
        &self.about
    }

    pub fn projects(&self) -> &HoverSection {
        &self.projects
    }

    pub fn skills(&self) -> &HoverSection {
        &self.skills
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn reveals(&self) -> &ViewportRevealTracker {
        &self.reveals
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn hit_areas(&self) -> &HitAreaRegistry {
        &self.hit_areas
    }

    /// Target under the pointer.
    pub fn hovered_target(&self) -> Option<HitTarget> {
        self.hit_areas.hovered()
    }

    /// Section at the top of the viewport.
    pub fn active_section(&self) -> Option<SectionId> {
        self.geometry.section_at(self.viewport.offset())
    }

    /// Snapshot of everything the renderer reads this frame.
    pub fn page_view(&self) -> PageView<'_> {
        let state = self.theme.state();
        PageView {
            mode: state.mode,
            source: state.source,
            now: self.now(),
            scroll_offset: self.viewport.offset(),
            hero: self.hero.snapshot(),
            about: self.about.reveal(),
            projects: self.projects.reveal(),
            hovered_project: self.projects.hovered(),
            skills: self.skills.reveal(),
            hovered_category: self.skills.hovered(),
            footer: Reveal::mounted_at(self.footer_mounted_at),
            menu: self.menu.snapshot(self.now()),
        }
    }

    /// Feed pending viewport reports to the reveal tracker.
    fn sync_viewport(&mut self) {
        self.viewport.set_time(self.timers.now());
        for entry in self.viewport.take_entries() {
            self.reveals.on_intersection(&mut self.viewport, &entry);
        }
        self.absorb_changes();
    }

    /// Pick up notifications from theme and reveal subscribers.
    fn absorb_changes(&mut self) {
        if self.changed.replace(false) {
            self.mark_dirty();
        }
    }

    /// Re-register body, drawer and header targets for the current scroll
    /// offset. An open drawer hides the body targets beneath it.
    fn rebuild_hit_areas(&mut self) {
        self.hit_areas.clear();
        self.hit_areas.register_document(
            &self.geometry.targets,
            self.viewport.offset(),
            self.layout.body(),
        );

        let view = self.page_view();
        let menu = if self.menu.is_open() && !self.layout.shows_nav() {
            let area = menu_area(self.layout.body());
            Some((area, build_menu(area, &view, None).targets))
        } else {
            None
        };

        let header = build_header(
            self.layout.header(),
            self.portfolio,
            &view,
            self.active_section(),
            None,
        );

        if let Some((area, targets)) = menu {
            self.hit_areas.cover(area);
            for (rect, target) in targets {
                self.hit_areas.register(rect, target);
            }
        }
        for (rect, target) in header.targets {
            self.hit_areas.register(rect, target);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.reveals.teardown(&mut self.viewport);
    }
}

/// Measure section rows and targets at `layout`.
///
/// Geometry does not depend on engine state, so an idle snapshot is enough.
fn measure(layout: LayoutContext, portfolio: &Portfolio) -> DocumentGeometry {
    let idle = PageView {
        mode: crate::engine::ThemeMode::Light,
        source: crate::engine::ThemeSource::SystemDefault,
        now: Duration::ZERO,
        scroll_offset: 0,
        hero: HeroSnapshot {
            caption: "",
            full_caption: portfolio.hero.caption,
            caret_visible: false,
            intro: Reveal::HIDDEN,
            particles: &NO_PARTICLES,
        },
        about: Reveal::HIDDEN,
        projects: Reveal::HIDDEN,
        hovered_project: None,
        skills: Reveal::HIDDEN,
        hovered_category: None,
        footer: Reveal::HIDDEN,
        menu: MenuSnapshot::default(),
    };
    Document::build(layout, portfolio, &idle).geometry()
}

/// Publish section rows and the visible height to the viewport.
fn apply_geometry(viewport: &mut ScrollViewport, geometry: &DocumentGeometry, layout: LayoutContext) {
    for span in &geometry.sections {
        viewport.set_element_rows(span.section.element_id(), span.rows.clone());
    }
    viewport.set_height(layout.viewport_height());
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::mock::{FixedAppearance, InMemoryStore};

    /// App over in-memory storage and a light system appearance.
    pub fn app_with(config: Config, size: (u16, u16)) -> App {
        let theme = ThemePreferenceStore::new(InMemoryStore::new(), FixedAppearance::light());
        App::new(config, theme, size).unwrap()
    }

    pub fn app(size: (u16, u16)) -> App {
        app_with(Config::default(), size)
    }
}
