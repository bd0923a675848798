// Status bar component
//
// One line at the bottom: uptime, the active section, scroll position, a
// menu-open marker, and the most recent captured log entry.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let controller = &app.controller;

    let active = controller.nav().active().unwrap_or("-");
    let offset = controller.scroll().offset();
    let max_offset = (controller.sections().document_height() - controller.viewport_height())
        .max(0.0);
    let percent = if max_offset > 0.0 {
        (offset / max_offset * 100.0).round()
    } else {
        0.0
    };

    let menu_marker = if controller.menu().is_open() {
        " │ menu open"
    } else {
        ""
    };

    let log_part = match app.log_buffer.latest() {
        Some(entry) => format!(
            " │ {} {} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            entry.message
        ),
        None => String::new(),
    };

    let text = format!(
        " {} │ {} │ {:>3.0}%{}{}",
        app.uptime(),
        active,
        percent,
        menu_marker,
        log_part
    );

    let status = Paragraph::new(text).style(
        Style::default()
            .fg(app.theme.muted)
            .bg(app.theme.navbar_bg),
    );
    f.render_widget(status, area);
}
