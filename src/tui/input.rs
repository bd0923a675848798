// Input handling - terminal events to page events
//
// Layered dispatch, most specific first:
// 1. A focused form field captures printable keys
// 2. Global keys (quit, menu toggle, nav digits)
// 3. Scroll keys
// Mouse input is resolved against the hit zones the renderer published on
// the previous frame.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::app::{App, SCROLL_STEP_PX};
use crate::content;
use crate::events::PageEvent;

/// Handle a keyboard event.
pub fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl-C quits no matter what has focus
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Layer 1: a focused form field swallows text input
    if let Some(field) = app.focused_field {
        match key.code {
            KeyCode::Esc => app.blur_field(),
            KeyCode::Tab => app.focus_next_field(),
            KeyCode::Enter => app.handle_event(PageEvent::FormSubmit, now),
            KeyCode::Backspace => {
                let _ = app.controller.form_mut().value_mut(field).pop();
            }
            KeyCode::Char(c) => {
                app.controller.form_mut().value_mut(field).push(c);
            }
            _ => {}
        }
        return;
    }

    // Layer 2: global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            // The hamburger only exists in the compact layout
            if app.is_compact() {
                app.handle_event(PageEvent::MenuToggle, now);
            }
            return;
        }
        KeyCode::Esc => {
            app.handle_event(PageEvent::OutsideClick { inside_navbar: false }, now);
            return;
        }
        KeyCode::Tab => {
            app.focus_next_field();
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(section) = content::SECTIONS.get(index) {
                app.handle_event(PageEvent::NavClick { section: section.id }, now);
            }
            return;
        }
        _ => {}
    }

    // Layer 3: scroll keys
    let viewport = app.controller.viewport_height();
    let delta = match key.code {
        KeyCode::Up | KeyCode::Char('k') => -SCROLL_STEP_PX,
        KeyCode::Down | KeyCode::Char('j') => SCROLL_STEP_PX,
        KeyCode::PageUp => -(viewport - SCROLL_STEP_PX).max(SCROLL_STEP_PX),
        KeyCode::PageDown => (viewport - SCROLL_STEP_PX).max(SCROLL_STEP_PX),
        KeyCode::Home => -f32::MAX,
        KeyCode::End => f32::MAX,
        _ => return,
    };
    app.handle_event(PageEvent::Scroll { delta }, now);
}

/// Handle a mouse event.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.handle_event(PageEvent::Scroll { delta: -SCROLL_STEP_PX }, now);
        }
        MouseEventKind::ScrollDown => {
            app.handle_event(PageEvent::Scroll { delta: SCROLL_STEP_PX }, now);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(app, Position::new(mouse.column, mouse.row), now);
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, position: Position, now: Instant) {
    let zones = app.zones.clone();

    // Nav links first: inline on desktop, menu entries when the menu is open
    if let Some(section) = zones.link_at(position) {
        app.handle_event(PageEvent::NavClick { section }, now);
        app.blur_field();
        return;
    }

    if let Some(hamburger) = zones.hamburger {
        if hamburger.contains(position) {
            app.handle_event(PageEvent::MenuToggle, now);
            return;
        }
    }

    // Any other click: let the menu decide whether it was "outside"
    let inside_navbar = zones.contains_navbar(position);
    app.handle_event(PageEvent::OutsideClick { inside_navbar }, now);

    // Then resolve form interactions
    if let Some(field) = zones.field_at(position) {
        app.focused_field = Some(field);
        return;
    }
    if let Some(submit) = zones.submit {
        if submit.contains(position) {
            app.handle_event(PageEvent::FormSubmit, now);
            return;
        }
    }
    app.blur_field();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::page::form::Field;

    fn app() -> App {
        App::new(Config::default(), LogBuffer::new(), 130, 40)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_activate_nav_links() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('2')), Instant::now());
        assert_eq!(app.controller.nav().active(), Some("about"));
    }

    #[test]
    fn test_focused_field_swallows_global_keys() {
        let mut app = app();
        app.focused_field = Some(Field::Name);
        handle_key_event(&mut app, press(KeyCode::Char('q')), Instant::now());

        assert!(!app.should_quit);
        assert_eq!(app.controller.form().name, "q");
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut app = app();
        app.focused_field = Some(Field::Email);
        for c in "ab".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)), Instant::now());
        }
        handle_key_event(&mut app, press(KeyCode::Backspace), Instant::now());
        assert_eq!(app.controller.form().email, "a");
    }

    #[test]
    fn test_enter_submits_from_focused_field() {
        let mut app = app();
        app.focused_field = Some(Field::Message);
        handle_key_event(&mut app, press(KeyCode::Enter), Instant::now());

        // Empty form: validation error surfaces as a notification
        assert!(app.controller.notifications().current().is_some());
    }

    #[test]
    fn test_scroll_keys_move_the_page() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Down), Instant::now());
        assert_eq!(app.controller.scroll().offset(), SCROLL_STEP_PX);

        handle_key_event(&mut app, press(KeyCode::End), Instant::now());
        let bottom = app.controller.scroll().offset();
        handle_key_event(&mut app, press(KeyCode::Down), Instant::now());
        assert_eq!(app.controller.scroll().offset(), bottom);
    }

    #[test]
    fn test_menu_toggle_only_in_compact_layout() {
        // 130 cols * 10 px = 1300 px: desktop
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('m')), Instant::now());
        assert!(!app.controller.menu().is_open());

        let mut compact = App::new(Config::default(), LogBuffer::new(), 80, 40);
        handle_key_event(&mut compact, press(KeyCode::Char('m')), Instant::now());
        assert!(compact.controller.menu().is_open());
    }
}
