// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Music Catalog Browser TUI.
//!
//! A terminal-based browser for a remote music file catalog.
//!
//! The application requests the record list from the catalog server once
//! at startup and presents it as a selectable table.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** performs the catalog fetch via asynchronous
//!   command processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure
//! the terminal state is preserved even in the event of a crash.
//! Communication between the UI and the background worker is handled via
//! `std::sync::mpsc` channels.

mod actions;
mod components;
mod config;
mod model;
mod render;
mod source;
mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    components::RecordTableState,
    config::AppConfig,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub record_table: RecordTableState,

    pub status_message: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            record_table: RecordTableState::new(),
            status_message: None,
        }
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, command_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function enables raw mode to capture all keyboard input and
/// switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including
/// disabling raw mode and leaving the alternate screen. It also ensures
/// the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a
/// result, as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event
/// loop.
///
/// This function spawns several long-running background threads:
/// * A command worker to process asynchronous [`AppCommand`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an
/// unrecoverable application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    // Spawn a background worker to process application commands asynchronously.
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(&app.config, command_rx, command_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // The one fetch for this activation: the record list is requested
    // exactly once, when the application starts.
    app.command_tx.send(AppCommand::FetchRecords).unwrap();

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
