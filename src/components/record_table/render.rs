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

//! UI rendering logic for the record table.
//!
//! This module handles the visual representation of catalog records,
//! including column layout, selection highlighting, and theme application
//! using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::RecordTable, theme::Theme};

impl RecordTable<'_> {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.list.records().iter().map(|record| {
            let selected = self.list.is_selected(record.id);
            let selection_indicator = if selected {
                Line::from("+").style(Style::default().fg(Color::Black).bg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let track_number = format!("{:02}", record.track_number);
            let year = record.year.to_string();

            Row::new(vec![
                Cell::from(selection_indicator),
                Cell::from(
                    Line::from(record.file_name.as_str())
                        .style(Style::default().fg(theme.table_file_fg)),
                ),
                Cell::from(
                    Line::from(record.song_title.as_str())
                        .style(Style::default().fg(theme.table_song_fg)),
                ),
                Cell::from(
                    Line::from(record.artist_name.as_str())
                        .style(Style::default().fg(theme.table_artist_fg)),
                ),
                Cell::from(
                    Line::from(record.album_name.as_str())
                        .style(Style::default().fg(theme.table_album_fg)),
                ),
                Cell::from(
                    Line::from(track_number)
                        .style(Style::default().fg(theme.table_track_number_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(year)
                        .style(Style::default().fg(theme.table_year_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Percentage(25),
                Constraint::Percentage(30),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
                Constraint::Length(5),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Filename"),
                Cell::from("Song"),
                Cell::from("Artist"),
                Cell::from("Album"),
                Cell::from(Line::from("Track").alignment(Alignment::Right)),
                Cell::from(Line::from("Year").alignment(Alignment::Right)),
            ])
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme.accent_colour),
            )
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        f.render_stateful_widget(table, area, self.table_state);
    }
}
