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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette for the record
//! table, the chrome, and the load-state screens.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) status_fg: Color,

    pub(crate) table_file_fg: Color,
    pub(crate) table_song_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_album_fg: Color,
    pub(crate) table_track_number_fg: Color,
    pub(crate) table_year_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            error_colour: Color::Rgb(224, 108, 117),

            status_fg: Color::Rgb(162, 161, 166),

            table_file_fg: Color::Rgb(180, 180, 190),
            table_song_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(255, 215, 0),
            table_album_fg: Color::Rgb(179, 157, 219),
            table_track_number_fg: Color::Rgb(162, 161, 166),
            table_year_fg: Color::Rgb(162, 161, 166),
        }
    }
}
