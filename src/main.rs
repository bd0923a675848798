// onepage - a one-page marketing site rendered in the terminal
//
// Architecture:
// - page: headless interaction core (scroll, active-section tracking, the
//   compact menu, notifications, the contact form)
// - content: the static page copy and section layout
// - tui (ratatui): renders the page and translates terminal input into
//   page events
// - logging: in-memory tracing capture so logs never tear the screen

mod cli;
mod config;
mod content;
mod events;
mod logging;
mod page;
mod theme;
mod tui;

use anyhow::Result;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle subcommands first (config --show, --path, --reset);
    // if one ran, exit early
    let Some(flags) = cli::handle_cli() else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::load();
    if flags.reduced_motion {
        config.reduced_motion = true;
    }
    if let Some(theme) = flags.theme {
        config.theme = theme;
    }

    // Route all tracing output into the in-memory buffer the status bar
    // reads; stdout belongs to the alternate screen now
    let log_buffer = LogBuffer::new();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(TuiLogLayer::new(log_buffer.clone()))
        .init();

    tracing::info!(version = config::VERSION, theme = %config.theme, "starting onepage");

    tui::run(config, log_buffer).await
}
