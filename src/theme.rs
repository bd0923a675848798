// Theme support for the TUI
//
// Two built-in palettes, selected by config. The resolved Theme carries
// every color the renderer needs; nothing reads config at render time.

use crate::page::notify::Severity;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Terminal colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── Navigation bar ──────────────────────────────────────
    pub brand: Color,
    pub navbar_bg: Color,
    /// Background once the page scrolls past the threshold.
    pub navbar_scrolled_bg: Color,
    pub link: Color,
    pub link_active: Color,

    // ─── Content ─────────────────────────────────────────────
    pub heading: Color,
    pub border: Color,
    pub field_label: Color,
    pub field_focused: Color,

    // ─── Notifications ───────────────────────────────────────
    pub info: Color,
    pub success: Color,
    pub error: Color,

    // ─── Border style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Rgb(16, 18, 24),
            foreground: Color::Rgb(214, 219, 230),
            muted: Color::Rgb(94, 101, 117),
            brand: Color::Rgb(255, 179, 71),
            navbar_bg: Color::Rgb(16, 18, 24),
            navbar_scrolled_bg: Color::Rgb(32, 36, 48),
            link: Color::Rgb(158, 166, 182),
            link_active: Color::Rgb(255, 179, 71),
            heading: Color::Rgb(129, 200, 255),
            border: Color::Rgb(58, 63, 76),
            field_label: Color::Rgb(158, 166, 182),
            field_focused: Color::Rgb(129, 200, 255),
            info: Color::Rgb(129, 200, 255),
            success: Color::Rgb(129, 218, 144),
            error: Color::Rgb(245, 120, 120),
            border_type: BorderType::Rounded,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::Rgb(248, 248, 245),
            foreground: Color::Rgb(42, 46, 56),
            muted: Color::Rgb(150, 152, 160),
            brand: Color::Rgb(192, 98, 0),
            navbar_bg: Color::Rgb(248, 248, 245),
            navbar_scrolled_bg: Color::Rgb(230, 230, 224),
            link: Color::Rgb(100, 104, 116),
            link_active: Color::Rgb(192, 98, 0),
            heading: Color::Rgb(20, 98, 168),
            border: Color::Rgb(196, 198, 204),
            field_label: Color::Rgb(100, 104, 116),
            field_focused: Color::Rgb(20, 98, 168),
            info: Color::Rgb(20, 98, 168),
            success: Color::Rgb(24, 132, 74),
            error: Color::Rgb(186, 42, 42),
            border_type: BorderType::Rounded,
        }
    }

    /// Resolve a configured theme name; unknown names fall back to dark.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color for a notification of the given severity.
    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.info,
            Severity::Success => self.success,
            Severity::Error => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back_to_dark() {
        assert_eq!(Theme::by_name("solarized").name, "dark");
        assert_eq!(Theme::by_name("LIGHT").name, "light");
    }

    #[test]
    fn test_severity_mapping() {
        let theme = Theme::dark();
        assert_eq!(theme.severity(Severity::Error), theme.error);
        assert_eq!(theme.severity(Severity::Success), theme.success);
    }
}
