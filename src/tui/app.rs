// TUI application state
//
// Bridges the headless page controller to the terminal: owns the theme, the
// quit flag, form focus, and the hit zones the renderer publishes so mouse
// input can be mapped back onto page elements.

use std::time::Instant;

use ratatui::layout::{Position, Rect};

use crate::config::Config;
use crate::content;
use crate::events::PageEvent;
use crate::logging::LogBuffer;
use crate::page::controller::{PageController, PageOptions};
use crate::page::form::Field;
use crate::theme::Theme;

/// Virtual pixels per terminal cell, both axes. The page is designed in
/// pixels; the terminal samples it at this scale.
pub const PX_PER_CELL: f32 = 10.0;

/// Navbar height in cells (bordered block).
pub const NAVBAR_ROWS: u16 = 3;

/// Status bar height in cells.
pub const STATUS_ROWS: u16 = 1;

/// Pixel delta for one scroll step (arrow key / wheel notch).
pub const SCROLL_STEP_PX: f32 = 30.0;

/// Screen regions the renderer publishes each frame for mouse hit-testing.
#[derive(Debug, Default, Clone)]
pub struct HitZones {
    /// The whole navigation bar, hamburger and open menu included.
    pub navbar: Rect,
    pub hamburger: Option<Rect>,
    /// Clickable nav links: inline on desktop, menu entries when open.
    pub links: Vec<(Rect, &'static str)>,
    /// The open compact menu overlay, if rendered.
    pub menu: Option<Rect>,
    /// Contact form fields currently on screen.
    pub fields: Vec<(Rect, Field)>,
    pub submit: Option<Rect>,
}

impl HitZones {
    pub fn contains_navbar(&self, position: Position) -> bool {
        self.navbar.contains(position)
            || self.menu.map(|rect| rect.contains(position)).unwrap_or(false)
    }

    pub fn link_at(&self, position: Position) -> Option<&'static str> {
        self.links
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|&(_, section)| section)
    }

    pub fn field_at(&self, position: Position) -> Option<Field> {
        self.fields
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|&(_, field)| field)
    }
}

/// Main application state for the TUI.
pub struct App {
    pub controller: PageController,
    pub theme: Theme,
    pub config: Config,
    pub log_buffer: LogBuffer,
    pub should_quit: bool,
    /// Which contact-form field is receiving keystrokes, if any.
    pub focused_field: Option<Field>,
    /// Rebuilt by the renderer every frame.
    pub zones: HitZones,
    start_time: Instant,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer, terminal_cols: u16, terminal_rows: u16) -> Self {
        let theme = Theme::by_name(&config.theme);
        let (width, height) = Self::viewport_px(terminal_cols, terminal_rows);

        let controller = PageController::new(
            content::section_map(),
            PageOptions {
                viewport_width: width,
                viewport_height: height,
                navbar_height: f32::from(NAVBAR_ROWS) * PX_PER_CELL,
                reduced_motion: config.reduced_motion,
                desktop_breakpoint: config.desktop_breakpoint,
            },
        );

        Self {
            controller,
            theme,
            config,
            log_buffer,
            should_quit: false,
            focused_field: None,
            zones: HitZones::default(),
            start_time: Instant::now(),
        }
    }

    /// Map a terminal size to the page viewport in virtual pixels. The
    /// navbar and status bar rows are chrome, not viewport.
    pub fn viewport_px(terminal_cols: u16, terminal_rows: u16) -> (f32, f32) {
        let content_rows = terminal_rows.saturating_sub(NAVBAR_ROWS + STATUS_ROWS);
        (
            f32::from(terminal_cols) * PX_PER_CELL,
            f32::from(content_rows) * PX_PER_CELL,
        )
    }

    /// Whether the nav is in its compact (hamburger) layout.
    pub fn is_compact(&self) -> bool {
        self.controller.viewport_width() <= self.config.desktop_breakpoint
    }

    pub fn handle_event(&mut self, event: PageEvent, now: Instant) {
        self.controller.handle(event, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }

    /// Move focus to the next form field, starting at the first.
    pub fn focus_next_field(&mut self) {
        self.focused_field = Some(match self.focused_field {
            Some(field) => field.next(),
            None => Field::Name,
        });
    }

    pub fn blur_field(&mut self) {
        self.focused_field = None;
    }
}
