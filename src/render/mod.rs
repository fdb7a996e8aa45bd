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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. The catalog occupies the whole
//! frame apart from a one-line status footer; which screen fills the
//! content area depends on how far the catalog fetch has progressed.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, model::records::LoadState, theme::Theme};

/// Renders the user interface to the terminal frame.
///
/// The frame is split into a content area and a one-line status footer.
/// The content area shows a loading panel until the fetch settles, then
/// either the record table or a generic failure panel; no partial data is
/// ever drawn.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: content, status footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match app.record_table.list.load_state() {
        LoadState::Loading => draw_panel(
            f,
            outer[0],
            &app.theme,
            "Loading the catalog...",
            app.theme.accent_colour,
        ),
        LoadState::Loaded => app.record_table.as_widget().draw(f, outer[0], &app.theme),
        LoadState::Failed => draw_panel(
            f,
            outer[0],
            &app.theme,
            "Failed to load the catalog.",
            app.theme.error_colour,
        ),
    }

    draw_status(f, outer[1], app);
}

// Centers a short bordered panel in the content area.
fn draw_panel(f: &mut Frame, area: Rect, theme: &Theme, text: &str, fg: Color) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(40),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour)),
        );

    f.render_widget(panel, horizontal[1]);
}

// One-line footer: record and selection counts once loaded, otherwise the
// fetch status, with any background error taking precedence.
fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let text = if let Some(message) = &app.status_message {
        message.clone()
    } else {
        match app.record_table.list.load_state() {
            LoadState::Loading => "fetching records...".to_string(),
            LoadState::Loaded => format!(
                "{} records, {} selected",
                app.record_table.list.records().len(),
                app.record_table.list.selected_count(),
            ),
            LoadState::Failed => "fetch failed".to_string(),
        }
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(app.theme.status_fg))
        .block(Block::default().padding(Padding::horizontal(1)));

    f.render_widget(footer, area);
}
