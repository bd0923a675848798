// Configuration
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/onepage/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Event loop tick granularity in milliseconds
    pub tick_ms: u64,

    /// Skip entrance animations and reveal every section immediately
    pub reduced_motion: bool,

    /// Viewport width (px) past which the layout switches to desktop
    pub desktop_breakpoint: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            use_theme_background: true,
            tick_ms: 16,
            reduced_motion: false,
            desktop_breakpoint: 1200.0,
        }
    }
}

/// File representation: everything optional so a partial config file works
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    theme: Option<String>,
    use_theme_background: Option<bool>,
    tick_ms: Option<u64>,
    reduced_motion: Option<bool>,
    desktop_breakpoint: Option<f32>,
}

impl Config {
    /// Load configuration: env > file > defaults.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(file) = Self::read_config_file() {
            if let Some(theme) = file.theme {
                config.theme = theme;
            }
            if let Some(bg) = file.use_theme_background {
                config.use_theme_background = bg;
            }
            if let Some(tick_ms) = file.tick_ms {
                config.tick_ms = tick_ms.max(1);
            }
            if let Some(reduced) = file.reduced_motion {
                config.reduced_motion = reduced;
            }
            if let Some(breakpoint) = file.desktop_breakpoint {
                config.desktop_breakpoint = breakpoint;
            }
        }

        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(theme) = std::env::var("ONEPAGE_THEME") {
            self.theme = theme;
        }
        if let Ok(value) = std::env::var("ONEPAGE_TICK_MS") {
            if let Ok(tick_ms) = value.parse::<u64>() {
                self.tick_ms = tick_ms.max(1);
            }
        }
        if let Ok(value) = std::env::var("ONEPAGE_REDUCED_MOTION") {
            self.reduced_motion = value == "1" || value.eq_ignore_ascii_case("true");
        }
        if let Ok(value) = std::env::var("ONEPAGE_BREAKPOINT") {
            if let Ok(breakpoint) = value.parse::<f32>() {
                self.desktop_breakpoint = breakpoint;
            }
        }
    }

    /// Path to the config file, if a config directory exists on this platform.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("onepage").join("config.toml"))
    }

    fn read_config_file() -> Option<FileConfig> {
        let path = Self::config_path()?;
        let contents = fs::read_to_string(path).ok()?;
        match toml::from_str(&contents) {
            Ok(file) => Some(file),
            Err(error) => {
                tracing::warn!(%error, "ignoring malformed config file");
                None
            }
        }
    }

    /// Write a commented template on first run so the options are
    /// discoverable. Existing files are left alone.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = fs::write(path, Self::default_toml());
    }

    /// The template written on first run.
    pub fn default_toml() -> &'static str {
        r#"# onepage configuration
# Values here override the built-in defaults; environment variables
# (ONEPAGE_THEME, ONEPAGE_TICK_MS, ONEPAGE_REDUCED_MOTION,
# ONEPAGE_BREAKPOINT) override values here.

# Theme: "dark" or "light"
theme = "dark"

# Use the theme's background color (false keeps the terminal's own)
use_theme_background = true

# Event loop tick granularity in milliseconds
tick_ms = 16

# Reveal all sections immediately instead of animating them in
reduced_motion = false

# Viewport width in virtual pixels past which the nav shows inline links
# instead of the hamburger menu (10 px per terminal column)
desktop_breakpoint = 1200.0
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.tick_ms, 16);
        assert!(!config.reduced_motion);
        assert_eq!(config.desktop_breakpoint, 1200.0);
    }

    #[test]
    fn test_partial_file_parses() {
        let file: FileConfig = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(file.theme.as_deref(), Some("light"));
        assert!(file.tick_ms.is_none());
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let file: FileConfig = toml::from_str(Config::default_toml()).unwrap();
        assert_eq!(file.theme.as_deref(), Some("dark"));
        assert_eq!(file.tick_ms, Some(16));
        assert_eq!(file.reduced_motion, Some(false));
        assert_eq!(file.desktop_breakpoint, Some(1200.0));
    }
}
