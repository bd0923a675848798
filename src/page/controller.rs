// Page controller - orchestrates the interaction state machines
//
// Owns every piece of page state and is the only writer to any of it. Input
// arrives as PageEvents; the tick drives everything deferred: the throttled
// scroll recompute, the smooth-scroll glide, notification phases, and reveal
// latching.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::events::PageEvent;
use crate::page::form::ContactForm;
use crate::page::menu::{Menu, DESKTOP_BREAKPOINT_PX};
use crate::page::nav::NavBar;
use crate::page::notify::{NotificationSlot, Severity};
use crate::page::reveal::SectionReveal;
use crate::page::scroll::ScrollState;
use crate::page::section::SectionMap;
use crate::page::throttle::Throttle;

/// Scroll recomputes are coalesced to roughly one frame.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(16);

/// Message shown when a submission passes validation.
const SUBMIT_OK: &str = "Thank you! Your message has been sent successfully.";

/// Construction-time knobs for the page.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Rendered navbar height in px; nav-click glides land under it.
    pub navbar_height: f32,
    pub reduced_motion: bool,
    pub desktop_breakpoint: f32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            navbar_height: 70.0,
            reduced_motion: false,
            desktop_breakpoint: DESKTOP_BREAKPOINT_PX,
        }
    }
}

/// The page's single state owner.
pub struct PageController {
    sections: SectionMap,
    nav: NavBar,
    menu: Menu,
    notifications: NotificationSlot,
    form: ContactForm,
    scroll: ScrollState,
    reveal: SectionReveal,
    throttle: Throttle,
    viewport_width: f32,
    viewport_height: f32,
}

impl PageController {
    pub fn new(sections: SectionMap, options: PageOptions) -> Self {
        let ids: Vec<_> = sections.boxes().iter().map(|s| s.id).collect();
        let scroll = ScrollState::new(sections.document_height(), options.viewport_height);
        let reveal = SectionReveal::new(sections.boxes().len(), options.reduced_motion);

        let mut controller = Self {
            nav: NavBar::new(ids, options.navbar_height),
            menu: Menu::with_breakpoint(options.desktop_breakpoint),
            notifications: NotificationSlot::new(),
            form: ContactForm::new(),
            scroll,
            reveal,
            throttle: Throttle::new(SCROLL_THROTTLE),
            viewport_width: options.viewport_width,
            viewport_height: options.viewport_height,
            sections,
        };
        // Initial highlight and reveal pass, before any events arrive
        controller.recompute();
        controller
    }

    /// Route one event. Deferred work (throttled recompute, glide movement,
    /// notification phases) happens in [`tick`](Self::tick).
    pub fn handle(&mut self, event: PageEvent, now: Instant) {
        match event {
            PageEvent::Scroll { delta } => self.on_scroll(delta, now),
            PageEvent::NavClick { section } => self.on_nav_click(section, now),
            PageEvent::MenuToggle => self.menu.toggle(),
            PageEvent::OutsideClick { inside_navbar } => self.menu.outside_click(inside_navbar),
            PageEvent::Resize { width, height } => self.on_resize(width, height),
            PageEvent::FormSubmit => self.on_form_submit(now),
        }
    }

    /// Advance time-driven state. Call at tick granularity (~16ms).
    pub fn tick(&mut self, now: Instant) {
        // The glide emits scroll movement like any other scroll source, so
        // it funnels through the same throttled recompute.
        if self.scroll.tick(now) {
            self.throttle.schedule(now);
        }
        if self.throttle.poll(now) {
            self.recompute();
        }
        self.notifications.tick(now);
    }

    fn on_scroll(&mut self, delta: f32, now: Instant) {
        if self.menu.scroll_locked() {
            return;
        }
        self.scroll.scroll_by(delta);
        self.throttle.schedule(now);
    }

    fn on_nav_click(&mut self, section_id: &'static str, now: Instant) {
        let Some(section) = self.sections.get(section_id) else {
            return;
        };
        let target = section.top - self.nav.height();

        self.menu.close();
        self.scroll.glide_to(target, now);
        // Reflect the click immediately instead of waiting for the glide's
        // scroll movement to settle through the throttle
        self.nav.highlight(section_id);
        debug!(section = section_id, target_px = target, "nav click");
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.scroll
            .set_bounds(self.sections.document_height(), height);
        self.menu.resize(width);
        self.recompute();
    }

    fn on_form_submit(&mut self, now: Instant) {
        match self.form.submit() {
            Ok(()) => self.notifications.show(SUBMIT_OK, Severity::Success, now),
            Err(error) => self
                .notifications
                .show(error.message(), Severity::Error, now),
        }
    }

    // Derive everything the scroll position implies: navbar styling, the
    // active link, and reveal latches.
    fn recompute(&mut self) {
        self.nav.set_scrolled(self.scroll.scrolled());
        self.nav.highlight(self.sections.locate(self.scroll.offset()));
        self.reveal
            .observe(self.sections.boxes(), self.scroll.offset(), self.viewport_height);
    }

    // Read-side accessors for the renderer and input mapping

    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn notifications(&self) -> &NotificationSlot {
        &self.notifications
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn is_revealed(&self, section_index: usize) -> bool {
        self.reveal.is_revealed(section_index)
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::notify::Phase;
    use crate::page::section::SectionMap;

    fn controller() -> PageController {
        let sections = SectionMap::from_heights(&[
            ("home", 500.0),
            ("about", 400.0),
            ("contact", 300.0),
        ]);
        PageController::new(
            sections,
            PageOptions {
                viewport_width: 1280.0,
                viewport_height: 400.0,
                navbar_height: 70.0,
                reduced_motion: false,
                desktop_breakpoint: 1200.0,
            },
        )
    }

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_initial_state_highlights_home() {
        let page = controller();
        assert_eq!(page.nav().active(), Some("home"));
        assert!(!page.nav().scrolled());
    }

    #[test]
    fn test_scroll_recompute_waits_for_throttle() {
        let base = Instant::now();
        let mut page = controller();

        page.handle(PageEvent::Scroll { delta: 600.0 }, base);
        // Offset moves immediately, the highlight does not
        assert_eq!(page.scroll().offset(), 600.0);
        assert_eq!(page.nav().active(), Some("home"));

        page.tick(at(base, 10));
        assert_eq!(page.nav().active(), Some("home"));

        page.tick(at(base, 16));
        assert_eq!(page.nav().active(), Some("about"));
        assert!(page.nav().scrolled());
    }

    #[test]
    fn test_scroll_burst_coalesces_into_one_recompute() {
        let base = Instant::now();
        let mut page = controller();

        for i in 0..10 {
            page.handle(PageEvent::Scroll { delta: 60.0 }, at(base, i));
        }
        // Last event at +9ms; deadline at +25ms
        page.tick(at(base, 24));
        assert_eq!(page.nav().active(), Some("home"));

        page.tick(at(base, 25));
        assert_eq!(page.nav().active(), Some("about"));
    }

    #[test]
    fn test_open_menu_blocks_scroll_until_closed() {
        let base = Instant::now();
        let mut page = controller();

        page.handle(PageEvent::MenuToggle, base);
        page.handle(PageEvent::Scroll { delta: 300.0 }, at(base, 1));
        assert_eq!(page.scroll().offset(), 0.0);

        page.handle(PageEvent::OutsideClick { inside_navbar: false }, at(base, 2));
        page.handle(PageEvent::Scroll { delta: 300.0 }, at(base, 3));
        assert_eq!(page.scroll().offset(), 300.0);
    }

    #[test]
    fn test_nav_click_highlights_immediately_and_closes_menu() {
        let base = Instant::now();
        let mut page = controller();

        page.handle(PageEvent::MenuToggle, base);
        page.handle(PageEvent::NavClick { section: "contact" }, at(base, 1));

        assert!(!page.menu().is_open());
        assert_eq!(page.nav().active(), Some("contact"));
        assert!(page.scroll().is_gliding());
    }

    #[test]
    fn test_nav_click_glide_lands_under_navbar() {
        let base = Instant::now();
        let mut page = controller();

        page.handle(PageEvent::NavClick { section: "about" }, base);
        // Let the glide finish and the trailing recompute fire
        page.tick(at(base, 400));
        page.tick(at(base, 500));

        // about.top(500) - navbar(70)
        assert_eq!(page.scroll().offset(), 430.0);
        assert_eq!(page.nav().active(), Some("about"));
    }

    #[test]
    fn test_unknown_nav_target_is_ignored() {
        let base = Instant::now();
        let mut page = controller();
        page.handle(PageEvent::NavClick { section: "missing" }, base);
        assert!(!page.scroll().is_gliding());
        assert_eq!(page.nav().active(), Some("home"));
    }

    #[test]
    fn test_resize_to_desktop_closes_menu() {
        let base = Instant::now();
        let mut page = controller();

        page.handle(PageEvent::MenuToggle, base);
        page.handle(
            PageEvent::Resize {
                width: 1300.0,
                height: 400.0,
            },
            at(base, 1),
        );
        assert!(!page.menu().is_open());
    }

    #[test]
    fn test_form_submit_error_keeps_input() {
        let base = Instant::now();
        let mut page = controller();

        page.form_mut().email.push_str("not-an-email");
        page.form_mut().name.push_str("A");
        page.form_mut().message.push_str("hi");
        page.handle(PageEvent::FormSubmit, base);

        let note = page.notifications().current().unwrap();
        assert_eq!(note.severity, Severity::Error);
        assert_eq!(page.form().email, "not-an-email");
    }

    #[test]
    fn test_form_submit_success_clears_and_notifies() {
        let base = Instant::now();
        let mut page = controller();

        page.form_mut().name.push_str("A");
        page.form_mut().email.push_str("a@b.co");
        page.form_mut().message.push_str("hi");
        page.handle(PageEvent::FormSubmit, base);

        let note = page.notifications().current().unwrap();
        assert_eq!(note.severity, Severity::Success);
        assert_eq!(note.phase(), Phase::Entering);
        assert!(page.form().name.is_empty());

        // The notification expires on its own
        page.tick(at(base, 4300));
        assert!(page.notifications().current().is_none());
    }

    #[test]
    fn test_scrolling_down_reveals_later_sections() {
        let base = Instant::now();
        let mut page = controller();
        assert!(page.is_revealed(0));
        assert!(!page.is_revealed(2));

        page.handle(PageEvent::Scroll { delta: 800.0 }, base);
        page.tick(at(base, 16));
        assert!(page.is_revealed(2));
    }
}
