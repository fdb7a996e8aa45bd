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

//! Input handling and event processing for the record table.
//!
//! This module maps raw terminal keyboard events to table navigation and
//! selection toggles.

use crossterm::event::{Event, KeyCode};

use crate::components::RecordTable;

impl RecordTable<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
                KeyCode::Char('g') => self.goto_first(),
                KeyCode::Char('G') => self.goto_last(),

                KeyCode::Char(' ') => {
                    self.toggle_select_current();
                    self.goto_next();
                }

                KeyCode::Backspace => {
                    self.toggle_select_current();
                    self.goto_previous();
                }

                _ => {}
            },

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::{components::RecordTableState, model::RecordDto};

    fn dto(song_title: &str) -> RecordDto {
        RecordDto {
            file_name: format!("{}.mp3", song_title.replace(' ', "")),
            song_title: song_title.to_string(),
            artist_name: "Ween".to_string(),
            album_name: "Mollusk".to_string(),
            track_number: 1,
            year: 1997,
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn space_toggles_the_cursor_row_and_advances() {
        let mut state = RecordTableState::new();
        state
            .list
            .records_loaded(vec![dto("Ocean Man"), dto("Buckingham Green")]);
        state.table_state.select(Some(0));

        state.as_widget().process_event(&key(KeyCode::Char(' ')));

        assert_eq!(state.table_state.selected(), Some(1));
        assert!(state.list.is_selected(1));
    }

    #[test]
    fn backspace_toggles_the_cursor_row_and_moves_back() {
        let mut state = RecordTableState::new();
        state
            .list
            .records_loaded(vec![dto("Ocean Man"), dto("Buckingham Green")]);
        state.table_state.select(Some(1));

        state.as_widget().process_event(&key(KeyCode::Backspace));

        assert_eq!(state.table_state.selected(), Some(0));
        assert!(state.list.is_selected(2));
    }

    #[test]
    fn space_twice_on_the_same_row_restores_the_selection() {
        let mut state = RecordTableState::new();
        state.list.records_loaded(vec![dto("Ocean Man")]);
        state.table_state.select(Some(0));

        state.as_widget().process_event(&key(KeyCode::Char(' ')));
        assert!(state.list.is_selected(1));

        // The cursor wrapped back around to the only row.
        state.as_widget().process_event(&key(KeyCode::Char(' ')));
        assert!(!state.list.is_selected(1));
        assert_eq!(state.list.selected_count(), 0);
    }
}
