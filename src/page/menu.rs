// Compact-layout menu state machine
//
// Below the desktop breakpoint the nav links collapse behind a hamburger
// toggle. The menu is a two-state machine: Closed or Open. While it is open
// the page behind it must not scroll, so the scroll lock is recomputed from
// the state on every transition - a redundant restore is a no-op, never a
// drift.

use tracing::debug;

/// Viewport width at which the layout switches to desktop, in px.
pub const DESKTOP_BREAKPOINT_PX: f32 = 1200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum MenuState {
    #[default]
    Closed,
    Open,
}

/// The compact-layout navigation menu.
#[derive(Debug, Clone)]
pub struct Menu {
    state: MenuState,
    breakpoint: f32,
    scroll_locked: bool,
}

impl Menu {
    pub fn new() -> Self {
        Self::with_breakpoint(DESKTOP_BREAKPOINT_PX)
    }

    pub fn with_breakpoint(breakpoint: f32) -> Self {
        Self {
            state: MenuState::Closed,
            breakpoint,
            scroll_locked: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Whether page scrolling is currently suppressed by the open menu.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Flip Closed <-> Open.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        debug!(open = self.is_open(), "menu toggled");
        self.apply_scroll_lock();
    }

    /// A click landed somewhere on the page; close unless it was inside the
    /// navigation container.
    pub fn outside_click(&mut self, inside_navbar: bool) {
        if self.state == MenuState::Open && !inside_navbar {
            self.close();
        }
    }

    /// The viewport was resized. Past the desktop breakpoint the compact
    /// menu no longer exists, so an open one must close.
    pub fn resize(&mut self, viewport_width: f32) {
        if viewport_width > self.breakpoint && self.state == MenuState::Open {
            debug!(viewport_width, "menu closed by resize to desktop layout");
            self.close();
        }
    }

    /// Force Closed. No-op when already closed.
    pub fn close(&mut self) {
        if self.state == MenuState::Open {
            self.state = MenuState::Closed;
            debug!("menu closed");
        }
        self.apply_scroll_lock();
    }

    // Recomputed on every transition so lock and state can never disagree.
    fn apply_scroll_lock(&mut self) {
        self.scroll_locked = self.state == MenuState::Open;
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let mut menu = Menu::new();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_open_locks_scroll_close_restores() {
        let mut menu = Menu::new();
        menu.toggle();
        assert!(menu.scroll_locked());

        menu.close();
        assert!(!menu.scroll_locked());

        // Redundant close stays consistent
        menu.close();
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let mut menu = Menu::new();
        menu.toggle();

        menu.outside_click(true);
        assert!(menu.is_open());

        menu.outside_click(false);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_on_closed_menu_is_noop() {
        let mut menu = Menu::new();
        menu.outside_click(false);
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_resize_past_breakpoint_closes() {
        let mut menu = Menu::new();
        menu.toggle();

        // Still compact: stays open
        menu.resize(1100.0);
        assert!(menu.is_open());

        menu.resize(1300.0);
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_resize_invariant_over_arbitrary_sequences() {
        // Whatever toggling happened before, a resize past the breakpoint
        // always leaves the menu closed.
        let mut menu = Menu::new();
        for _ in 0..7 {
            menu.toggle();
        }
        menu.resize(1300.0);
        assert!(!menu.is_open());

        menu.toggle();
        menu.toggle();
        menu.toggle();
        menu.resize(1201.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_exact_breakpoint_is_still_compact() {
        let mut menu = Menu::new();
        menu.toggle();
        menu.resize(1200.0);
        assert!(menu.is_open());
    }
}
