// Toast notification component
//
// Renders the current notification as an overlay below the navbar's right
// edge. The horizontal position comes from the notification's slide value,
// so it glides in after the entry delay and back out before removal.
// Clear ensures it paints over page content.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, NAVBAR_ROWS};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(notification) = app.controller.notifications().current() else {
        return;
    };
    let theme = &app.theme;

    // Width tracks the message, bounded by the frame; 4 for borders+padding
    let width = (notification.message.width() as u16 + 4).min(area.width.saturating_sub(4));
    let height = 3;
    if width < 6 || area.height < NAVBAR_ROWS + height + 1 {
        return;
    }

    // Resting position: right-aligned under the navbar. The slide value
    // pushes it off the right edge, clipping as it goes.
    let resting_x = area.right().saturating_sub(width + 2);
    let travel = f32::from(width + 2);
    let slide = notification.slide(Instant::now());
    let x = resting_x + (slide * travel).round() as u16;
    let visible_width = area.right().saturating_sub(x).min(width);
    if visible_width < 4 {
        return;
    }

    let toast_area = Rect::new(x, area.y + NAVBAR_ROWS + 1, visible_width, height);
    let accent = theme.severity(notification.severity);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(theme.background));

    let text = Paragraph::new(notification.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.foreground))
        .block(block);

    f.render_widget(Clear, toast_area);
    f.render_widget(text, toast_area);
}
