// UI rendering logic
//
// Top-level frame layout: navbar, page viewport, status bar. Overlays (the
// compact menu and the notification toast) render last so they sit on top.
// Every frame starts by resetting the hit zones; each component re-publishes
// the regions it drew so mouse input can find them.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use super::app::{App, HitZones, NAVBAR_ROWS, STATUS_ROWS};
use super::components;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    app.zones = HitZones::default();

    if app.config.use_theme_background {
        f.render_widget(
            Block::default().style(Style::default().bg(app.theme.background)),
            f.area(),
        );
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_ROWS), // Navigation bar
            Constraint::Min(1),              // Page viewport
            Constraint::Length(STATUS_ROWS), // Status bar
        ])
        .split(f.area());

    components::sections::render(f, chunks[1], app);
    components::navbar::render(f, chunks[0], app);

    // Overlays on top of the viewport
    if app.controller.menu().is_open() {
        components::menu::render(f, chunks[1], app);
    }
    components::toast::render(f, f.area(), app);

    components::status_bar::render(f, chunks[2], app);
}
