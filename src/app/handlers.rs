//! Event handling for the App.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::{App, AppEvent};
use crate::content::SectionId;
use crate::ui::document::HitTarget;
use crate::ui::entrance::Reveal;
use crate::ui::sections::hero::BOUNCE_PERIOD_MS;

impl App {
    /// Handle one event. Sets `needs_redraw` if the page changed.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick(elapsed) => self.tick(elapsed),
            AppEvent::Scroll(rows) => self.scroll_by(rows),
            AppEvent::ScrollPage(pages) => self.scroll_page(pages),
            AppEvent::ScrollTo(section) => self.jump_to(section),
            AppEvent::ScrollToEnd => self.scroll_to_end(),
            AppEvent::PointerMoved { x, y } => self.pointer_moved(x, y),
            AppEvent::PointerLeft => self.pointer_left(),
            AppEvent::Click { x, y } => self.click(x, y),
            AppEvent::ToggleTheme => self.toggle_theme(),
            AppEvent::ResetTheme => self.reset_theme(),
            AppEvent::ToggleMenu => self.toggle_menu(),
            AppEvent::Dismiss => {
                if !self.close_menu() {
                    self.quit();
                }
            }
            AppEvent::RestartTypewriter => self.restart_typewriter(),
            AppEvent::Resize(width, height) => self.resize(width, height),
            AppEvent::Quit => self.quit(),
        }
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }

    /// Advance the host clock, fire due timers and decide whether anything
    /// on screen moved.
    fn tick(&mut self, elapsed: Duration) {
        let mut typed = false;
        let timers = &self.timers;
        let hero = &mut self.hero;
        timers.advance_with(elapsed, |id| {
            typed |= hero.on_timer(id, timers.now());
        });

        let now = self.now();
        let mut redraw = typed | self.hero.update_caret(now);
        redraw |= self.is_animating(now);

        let bounce = now.as_millis() / (BOUNCE_PERIOD_MS / 2);
        if bounce != self.last_bounce {
            self.last_bounce = bounce;
            redraw = true;
        }

        let openness = self.menu.openness(now);
        if openness != self.last_openness {
            self.last_openness = openness;
            redraw = true;
        }

        if self.hero_on_screen() {
            let (width, height) = (self.layout.width, self.layout.hero_height());
            let cells = self.hero.particle_cells(now, width, height);
            if cells != self.last_particles {
                self.last_particles = cells;
                redraw = true;
            }
        }

        if redraw {
            self.mark_dirty();
        }
    }

    /// Whether an entrance or a hover effect is still moving.
    fn is_animating(&self, now: Duration) -> bool {
        let entrances = [
            self.hero.intro(),
            self.about.reveal(),
            self.projects.reveal(),
            self.skills.reveal(),
            Reveal::mounted_at(self.footer_mounted_at),
        ];
        let sparks = self.skills.section().is_revealed() && self.skills.hovered().is_some();
        sparks || entrances.iter().any(|reveal| reveal.is_animating(now))
    }

    /// Whether any hero row is inside the viewport.
    fn hero_on_screen(&self) -> bool {
        self.geometry
            .section_rows(SectionId::Home)
            .is_some_and(|rows| self.scroll_offset() < rows.end)
    }

    fn pointer_moved(&mut self, x: u16, y: u16) {
        self.pointer = Some((x, y));
        let previous = self.hit_areas.hovered();
        if self.hit_areas.update_hover(x, y) {
            let next = self.hit_areas.hovered();
            self.apply_hover(previous, next);
        }
    }

    fn pointer_left(&mut self) {
        self.pointer = None;
        let previous = self.hit_areas.hovered();
        if self.hit_areas.clear_hover() {
            self.apply_hover(previous, None);
        }
    }

    fn click(&mut self, x: u16, y: u16) {
        match self.hit_areas.hit_test(x, y) {
            Some(HitTarget::Jump(section)) => self.scroll_to(section),
            Some(HitTarget::MenuItem(section)) => self.jump_to(section),
            Some(HitTarget::ToggleTheme) => self.toggle_theme(),
            Some(HitTarget::ToggleMenu) => self.toggle_menu(),
            Some(HitTarget::Hover { section, key }) => {
                debug!(?section, key, "Click on hover card ignored");
            }
            None => {}
        }
    }

    /// Close the drawer, then jump to `section`.
    fn jump_to(&mut self, section: SectionId) {
        self.close_menu();
        self.scroll_to(section);
    }

    fn toggle_menu(&mut self) {
        if self.layout.shows_nav() {
            debug!("Menu toggle ignored while the nav fits");
            return;
        }
        self.menu.toggle(self.now());
        self.refresh_pointer();
    }

    /// Returns `true` if the drawer was open.
    fn close_menu(&mut self) -> bool {
        if !self.menu.close(self.now()) {
            return false;
        }
        self.refresh_pointer();
        true
    }

    fn toggle_theme(&mut self) {
        let mode = self.theme.toggle();
        info!(mode = %mode, "Theme toggled");
        self.absorb_changes();
    }

    fn reset_theme(&mut self) {
        let mode = self.theme.reset_to_system();
        info!(mode = %mode, "Theme reset to system");
        self.absorb_changes();
    }

    fn restart_typewriter(&mut self) {
        if let Err(e) = self.hero.restart(&self.timers) {
            warn!("Failed to restart typewriter: {}", e);
            return;
        }
        self.mark_dirty();
    }
}
