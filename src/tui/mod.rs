//! Terminal UI for the game.

mod app;
mod board;
mod history;
mod input;
mod ui;

pub use app::{App, Focus, Hitboxes, Message};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{error, info};

use crate::{Game, Settings};

/// Runs the interactive game until the user quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    init_file_logging(settings)?;
    info!(sort_order = ?settings.sort_order(), "Starting TUI");

    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(Game::with_sort_order(*settings.sort_order()));
    let res = app.run(&mut terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping it leaves both, on early returns and panics alike.
struct TerminalGuard<W: Write> {
    writer: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(writer: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { writer };
        execute!(guard.writer, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    fn restore(&mut self) -> io::Result<()> {
        let raw = disable_raw_mode();
        execute!(self.writer, LeaveAlternateScreen, DisableMouseCapture, Show)?;
        raw
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_file_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
