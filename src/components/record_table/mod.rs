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

//! Interactive record table widget and state management.
//!
//! This module provides the table component for displaying and selecting
//! catalog records. It separates persistent state ([`RecordTableState`])
//! from the transient widget view ([`RecordTable`]) built for each frame
//! or input event.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::records::RecordList;

pub(crate) struct RecordTableState {
    pub(crate) list: RecordList,
    pub(crate) table_state: TableState,
}

impl RecordTableState {
    pub(crate) fn new() -> Self {
        Self {
            list: RecordList::new(),
            table_state: TableState::new(),
        }
    }

    pub(crate) fn as_widget(&mut self) -> RecordTable<'_> {
        RecordTable {
            list: &mut self.list,
            table_state: &mut self.table_state,
        }
    }
}

pub(crate) struct RecordTable<'a> {
    list: &'a mut RecordList,
    table_state: &'a mut TableState,
}

impl RecordTable<'_> {
    fn goto_next(&mut self) {
        let len = self.list.records().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.list.records().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        self.table_state.select_first();
    }

    fn goto_last(&mut self) {
        self.table_state.select_last();
    }

    fn toggle_select_current(&mut self) {
        if let Some(selected_index) = self.table_state.selected() {
            let record_id = self.list.records().get(selected_index).map(|r| r.id);
            if let Some(id) = record_id {
                self.list.toggle(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordDto;

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

    fn loaded_table() -> RecordTableState {
        let mut state = RecordTableState::new();
        state
            .list
            .records_loaded(vec![dto("Ocean Man"), dto("Buckingham Green")]);
        state
    }

    #[test]
    fn cursor_wraps_at_both_ends() {
        let mut state = loaded_table();
        let mut table = state.as_widget();

        table.goto_next();
        assert_eq!(table.table_state.selected(), Some(0));
        table.goto_next();
        assert_eq!(table.table_state.selected(), Some(1));
        table.goto_next();
        assert_eq!(table.table_state.selected(), Some(0));

        table.goto_previous();
        assert_eq!(table.table_state.selected(), Some(1));
    }

    #[test]
    fn cursor_is_inert_on_an_empty_table() {
        let mut state = RecordTableState::new();
        let mut table = state.as_widget();

        table.goto_next();
        assert_eq!(table.table_state.selected(), None);
    }

    #[test]
    fn toggle_follows_the_cursor_row() {
        let mut state = loaded_table();
        let mut table = state.as_widget();

        table.goto_next();
        table.goto_next();
        table.toggle_select_current();

        assert!(state.list.is_selected(2));
        assert!(!state.list.is_selected(1));
    }

    #[test]
    fn toggle_without_a_cursor_is_ignored() {
        let mut state = loaded_table();
        state.as_widget().toggle_select_current();

        assert_eq!(state.list.selected_count(), 0);
    }
}
