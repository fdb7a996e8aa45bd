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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the
//! application, bridging user input (keyboard), background worker results
//! (the catalog fetch), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: The [`process_events`] function applies the event to
//!    the record list view state.
//! 3. **Render**: After each event is processed, the UI is re-drawn using
//!    the `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::RecordDto, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    RecordsFetched(Vec<RecordDto>),
    RecordsFetchFailed(String),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event
/// channel is closed. Events still queued when the loop exits, such as a
/// fetch result racing the exit, are dropped along with the channel and
/// never touch application state.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::RecordsFetched(records) => {
                app.record_table.list.records_loaded(records);
                if !app.record_table.list.records().is_empty() {
                    app.record_table.table_state.select(Some(0));
                }
            }
            AppEvent::RecordsFetchFailed(error) => {
                app.record_table.list.load_failed(error);
            }

            AppEvent::Error(message) => app.status_message = Some(message),

            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// The quit key is handled here; everything else is routed to the record
/// table, which owns cursor movement and selection toggling.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        _ => {
            let event = Event::Key(key);
            app.record_table.as_widget().process_event(&event);
        }
    }

    Ok(())
}
