// Page sections component
//
// Renders the slice of the document the viewport currently overlaps. Each
// cell row samples ten virtual pixels, so a section's rows come straight
// from its pixel box minus the scroll offset. Sections that have not
// revealed yet draw in the muted color.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::contact_form;
use crate::content;
use crate::tui::app::{App, PX_PER_CELL};

/// Left margin for page copy, in cells.
pub const LEFT_PAD: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 || area.width <= LEFT_PAD {
        return;
    }
    let theme = app.theme.clone();
    let offset = app.controller.scroll().offset();
    let viewport = f32::from(area.height) * PX_PER_CELL;
    let boxes = app.controller.sections().boxes().to_vec();

    for (index, (section, sbox)) in content::SECTIONS.iter().zip(boxes).enumerate() {
        if sbox.bottom() <= offset || sbox.top >= offset + viewport {
            continue;
        }
        let revealed = app.controller.is_revealed(index);
        let heading_style = if revealed {
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        let body_style = if revealed {
            Style::default().fg(theme.foreground)
        } else {
            Style::default().fg(theme.muted)
        };

        let top_row = px_to_row(sbox.top, offset);
        draw_line(
            f,
            area,
            top_row + 1,
            Line::from(Span::styled(section.heading, heading_style)),
        );
        draw_line(
            f,
            area,
            top_row + 2,
            Line::from(Span::styled(
                "─".repeat(section.heading.chars().count()),
                Style::default().fg(theme.border),
            )),
        );

        for (line_index, text) in section.body.iter().enumerate() {
            draw_line(
                f,
                area,
                top_row + 4 + line_index as i32,
                Line::from(Span::styled(*text, body_style)),
            );
        }

        if section.id == "contact" {
            let form_row = top_row + 5 + section.body.len() as i32;
            contact_form::render(f, area, app, form_row, revealed);
        }
    }
}

fn px_to_row(px: f32, offset: f32) -> i32 {
    ((px - offset) / PX_PER_CELL).round() as i32
}

/// Draw one line of page copy at a viewport-relative row, skipping rows
/// that fall outside the area.
pub(super) fn draw_line(f: &mut Frame, area: Rect, row: i32, line: Line) {
    if row < 0 || row >= i32::from(area.height) {
        return;
    }
    let rect = Rect::new(
        area.x + LEFT_PAD,
        area.y + row as u16,
        area.width.saturating_sub(LEFT_PAD),
        1,
    );
    f.render_widget(Paragraph::new(line), rect);
}
