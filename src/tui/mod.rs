// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (input, timer ticks)
// - Rendering the page
//
// The tick interval doubles as the page's clock: it drives the throttled
// scroll recompute, the smooth-scroll glide, notification phases, and
// reveal latching.

pub mod app;
pub mod components;
pub mod input;
pub mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::events::PageEvent;
use crate::logging::LogBuffer;
use app::App;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - including on error, so a failure never leaves the shell in
/// raw mode.
pub async fn run(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app = App::new(config, log_buffer, size.width, size.height);

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on terminal input and the tick interval at once;
/// whichever is ready first runs to completion before the next frame is
/// drawn. All page timing funnels through `App::tick`.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(app.config.tick_ms));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard, mouse, and resize input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    let now = Instant::now();
                    match event::read() {
                        Ok(Event::Key(key_event)) => input::handle_key_event(app, key_event, now),
                        Ok(Event::Mouse(mouse_event)) => {
                            input::handle_mouse_event(app, mouse_event, now);
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let (width, height) = App::viewport_px(cols, rows);
                            app.handle_event(PageEvent::Resize { width, height }, now);
                        }
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick: advances all deferred page work
            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
