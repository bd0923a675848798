// Contact form component
//
// Three labelled fields and a submit button, rendered inside the contact
// section. The focused field shows a cursor mark and takes keystrokes.
// Long values display their tail so the cursor stays in view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::sections::{draw_line, LEFT_PAD};
use crate::page::form::Field;
use crate::tui::app::App;

const SUBMIT_LABEL: &str = "[ Send Message ]";

pub fn render(f: &mut Frame, area: Rect, app: &mut App, top_row: i32, revealed: bool) {
    let theme = app.theme.clone();
    let box_width = usize::from(area.width.saturating_sub(LEFT_PAD + 14)).clamp(12, 40);

    for (index, field) in Field::ALL.into_iter().enumerate() {
        let row = top_row + (index as i32) * 2;
        let focused = app.focused_field == Some(field);

        let label_style = if focused {
            Style::default()
                .fg(theme.field_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.field_label)
        };
        let value_style = if revealed {
            Style::default().fg(theme.foreground)
        } else {
            Style::default().fg(theme.muted)
        };

        let value = app.controller.form().value(field).to_string();
        let cursor = if focused { "▏" } else { "" };
        let shown = format!("{}{}", tail_fit(&value, box_width.saturating_sub(1)), cursor);

        let line = Line::from(vec![
            Span::styled(format!("{:<9}", field.label()), label_style),
            Span::styled(
                format!("[{shown:<box_width$}]"),
                value_style,
            ),
        ]);
        draw_line(f, area, row, line);

        if row >= 0 && row < i32::from(area.height) {
            let rect = Rect::new(
                area.x + LEFT_PAD,
                area.y + row as u16,
                (9 + box_width as u16 + 2).min(area.width.saturating_sub(LEFT_PAD)),
                1,
            );
            app.zones.fields.push((rect, field));
        }
    }

    let submit_row = top_row + 7;
    let submit_style = Style::default()
        .fg(theme.brand)
        .add_modifier(Modifier::BOLD);
    draw_line(
        f,
        area,
        submit_row,
        Line::from(Span::styled(SUBMIT_LABEL, submit_style)),
    );
    if submit_row >= 0 && submit_row < i32::from(area.height) {
        app.zones.submit = Some(Rect::new(
            area.x + LEFT_PAD,
            area.y + submit_row as u16,
            (SUBMIT_LABEL.len() as u16).min(area.width.saturating_sub(LEFT_PAD)),
            1,
        ));
    }
}

/// Keep the tail of `value` that fits in `max_cols` display columns.
fn tail_fit(value: &str, max_cols: usize) -> String {
    let mut cols = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in value.chars().rev() {
        let width = c.width().unwrap_or(0);
        if cols + width > max_cols {
            break;
        }
        cols += width;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}
