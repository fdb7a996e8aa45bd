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

//! Catalog view state.
//!
//! This module owns the lifecycle of one catalog fetch: the three-way load
//! state, the records produced by a successful fetch, and the set of
//! records the user has marked. Records arrive from the server without
//! identities, so identity minting lives here too. Each fetch generation
//! gets fresh monotonic ids, which keeps selection entries from one
//! generation from ever naming a record of the next.

use std::collections::HashSet;

use crate::model::{Record, RecordDto};

/// The lifecycle of the catalog fetch.
///
/// A list starts `Loading`. The fetch outcome moves it to `Loaded` or
/// `Failed`; both are terminal until the list is re-armed with
/// [`RecordList::begin`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// View state for the fetched catalog.
///
/// Owns the load-state machine, the identified records, and the selection
/// set. All mutation happens through the methods here; rendering reads
/// through [`load_state`](RecordList::load_state),
/// [`records`](RecordList::records) and
/// [`is_selected`](RecordList::is_selected), none of which mutate.
pub(crate) struct RecordList {
    load_state: LoadState,
    records: Vec<Record>,
    selection: HashSet<i32>,
    next_id: i32,
    load_error: Option<String>,
}

impl RecordList {
    pub(crate) fn new() -> Self {
        let mut list = Self {
            load_state: LoadState::Loading,
            records: vec![],
            selection: HashSet::new(),
            next_id: 1,
            load_error: None,
        };
        // Construction doubles as the first activation.
        list.begin();
        list
    }

    /// Re-arms the list for a fresh fetch.
    ///
    /// Held records and the selection are discarded. The id counter is not
    /// reset: ids minted for a previous generation are never reissued.
    pub(crate) fn begin(&mut self) {
        self.load_state = LoadState::Loading;
        self.records.clear();
        self.selection.clear();
        self.load_error = None;
    }

    /// Stores the result of a successful fetch.
    ///
    /// Each incoming record is assigned the next fresh id, in input order.
    /// Ignored unless the list is still loading: the fetch is single-shot,
    /// so a result landing on a settled list has nothing left to update.
    pub(crate) fn records_loaded(&mut self, records: Vec<RecordDto>) {
        if self.load_state != LoadState::Loading {
            return;
        }

        let mut identified = Vec::with_capacity(records.len());
        for dto in records {
            let id = self.next_id;
            self.next_id += 1;
            identified.push(Record {
                id,
                file_name: dto.file_name,
                song_title: dto.song_title,
                artist_name: dto.artist_name,
                album_name: dto.album_name,
                track_number: dto.track_number,
                year: dto.year,
            });
        }

        self.records = identified;
        self.load_state = LoadState::Loaded;
    }

    /// Records a failed fetch.
    ///
    /// The error text is kept for diagnostics only; the UI distinguishes
    /// nothing beyond failed. Ignored once the list has settled.
    pub(crate) fn load_failed(&mut self, error: String) {
        if self.load_state != LoadState::Loading {
            return;
        }
        self.load_error = Some(error);
        self.load_state = LoadState::Failed;
    }

    /// Toggles whether the record with the given id is selected.
    ///
    /// Ids that do not name a currently held record are ignored, so a
    /// stale toggle from a previous generation cannot touch the selection.
    pub(crate) fn toggle(&mut self, id: i32) {
        if !self.records.iter().any(|r| r.id == id) {
            return;
        }
        if !self.selection.insert(id) {
            self.selection.remove(&id);
        }
    }

    pub(crate) fn is_selected(&self, id: i32) -> bool {
        self.selection.contains(&id)
    }

    pub(crate) fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.selection.len()
    }

    #[allow(dead_code)]
    pub(crate) fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(file_name: &str, song_title: &str, track_number: i32) -> RecordDto {
        RecordDto {
            file_name: file_name.to_string(),
            song_title: song_title.to_string(),
            artist_name: "Ween".to_string(),
            album_name: "Mollusk".to_string(),
            track_number,
            year: 1997,
        }
    }

    fn sample() -> Vec<RecordDto> {
        vec![
            dto("OceanMan.mp3", "Ocean Man", 13),
            dto("BuckinghamGreen.mp3", "Buckingham Green", 12),
            dto("TheBlarneyStone.mp3", "The Blarney Stone", 7),
        ]
    }

    #[test]
    fn new_list_is_loading_and_empty() {
        let list = RecordList::new();
        assert_eq!(list.load_state(), LoadState::Loading);
        assert!(list.records().is_empty());
        assert!(!list.is_selected(1));
    }

    #[test]
    fn loading_assigns_sequential_ids_in_input_order() {
        let mut list = RecordList::new();
        list.records_loaded(sample());

        assert_eq!(list.load_state(), LoadState::Loaded);
        let ids: Vec<i32> = list.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(list.records()[0].song_title, "Ocean Man");
        assert_eq!(list.records()[2].song_title, "The Blarney Stone");
    }

    #[test]
    fn loading_empty_input_yields_an_empty_loaded_list() {
        let mut list = RecordList::new();
        list.records_loaded(vec![]);

        assert_eq!(list.load_state(), LoadState::Loaded);
        assert!(list.records().is_empty());

        // The counter was not advanced: the next generation starts at 1.
        list.begin();
        list.records_loaded(sample());
        assert_eq!(list.records()[0].id, 1);
    }

    #[test]
    fn ids_are_never_reused_across_reloads() {
        let mut list = RecordList::new();
        list.records_loaded(sample());
        list.begin();
        list.records_loaded(sample());

        let ids: Vec<i32> = list.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
    }

    #[test]
    fn double_toggle_restores_the_prior_state() {
        let mut list = RecordList::new();
        list.records_loaded(sample());

        assert!(!list.is_selected(2));
        list.toggle(2);
        assert!(list.is_selected(2));
        list.toggle(2);
        assert!(!list.is_selected(2));
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn toggling_two_records_selects_both() {
        let mut list = RecordList::new();
        list.records_loaded(sample());

        list.toggle(2);
        list.toggle(1);

        assert!(list.is_selected(1));
        assert!(list.is_selected(2));
        assert!(!list.is_selected(3));
        assert_eq!(list.selected_count(), 2);
    }

    #[test]
    fn toggle_of_an_unknown_id_is_ignored() {
        let mut list = RecordList::new();
        list.records_loaded(sample());

        list.toggle(99);
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn begin_clears_records_and_selection() {
        let mut list = RecordList::new();
        list.records_loaded(sample());
        list.toggle(1);

        list.begin();

        assert_eq!(list.load_state(), LoadState::Loading);
        assert!(list.records().is_empty());
        assert!(!list.is_selected(1));
    }

    #[test]
    fn failure_is_terminal_and_holds_no_records() {
        let mut list = RecordList::new();
        list.load_failed("connection refused".to_string());

        assert_eq!(list.load_state(), LoadState::Failed);
        assert!(list.records().is_empty());
        assert_eq!(list.load_error(), Some("connection refused"));

        // A late success must not resurrect a settled list.
        list.records_loaded(sample());
        assert_eq!(list.load_state(), LoadState::Failed);
        assert!(list.records().is_empty());
    }

    #[test]
    fn late_failure_does_not_disturb_a_loaded_list() {
        let mut list = RecordList::new();
        list.records_loaded(sample());

        list.load_failed("late".to_string());

        assert_eq!(list.load_state(), LoadState::Loaded);
        assert_eq!(list.records().len(), 3);
        assert_eq!(list.load_error(), None);
    }
}
