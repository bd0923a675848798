// Components module - the page's building blocks
//
// One focused module per visual element:
// - Navbar: brand, inline links or hamburger, scrolled styling
// - Menu: the compact-layout link overlay
// - Sections: the scrolling page body with reveal dimming
// - Contact form: fields and submit button inside the contact section
// - Toast: the sliding notification overlay
// - Status bar: uptime, position, and the latest captured log line

pub mod contact_form;
pub mod menu;
pub mod navbar;
pub mod sections;
pub mod status_bar;
pub mod toast;
