// Navigation bar state
//
// Owns the link set and two pieces of derived styling state: which link is
// active, and whether the page has scrolled far enough for the bar to switch
// to its "scrolled" treatment. Rendering reads this; nothing else writes it.

/// One link in the navigation bar, tied to a section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub section: &'static str,
    pub active: bool,
}

/// The navigation bar: link set, active-link marker, scrolled flag.
#[derive(Debug, Clone)]
pub struct NavBar {
    links: Vec<NavLink>,
    scrolled: bool,
    /// Rendered height in px; nav clicks scroll the target under this.
    height: f32,
}

impl NavBar {
    pub fn new(sections: impl IntoIterator<Item = &'static str>, height: f32) -> Self {
        let links = sections
            .into_iter()
            .map(|section| NavLink {
                section,
                active: false,
            })
            .collect();
        Self {
            links,
            scrolled: false,
            height,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<&'static str> {
        self.links
            .iter()
            .find(|link| link.active)
            .map(|link| link.section)
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn set_scrolled(&mut self, scrolled: bool) {
        self.scrolled = scrolled;
    }

    /// Mark exactly the link for `active_section` active, all others not.
    ///
    /// Idempotent: re-applying the same id changes nothing observable.
    pub fn highlight(&mut self, active_section: &str) {
        for link in &mut self.links {
            link.active = link.section == active_section;
        }
    }
}
