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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload the blocking
//! catalog fetch from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppCommand`] requests into record source calls
//! and broadcasts the results back to the application via [`AppEvent`]s.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    actions::events::AppEvent,
    config::AppConfig,
    source::{HttpRecordSource, RecordSource},
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    FetchRecords,
}

/// Spawns a background thread to process application commands.
///
/// This worker thread initializes its own record source and enters a
/// blocking loop, listening for incoming [`AppCommand`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let source = HttpRecordSource::new(config.records_url.clone())
            .expect("Failed to initialise record source");

        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&source, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Executes a single command and sends the result back through the
/// application event channel.
///
/// A failed fetch is an outcome, not a worker error: it is reported as
/// [`AppEvent::RecordsFetchFailed`] and the worker keeps running.
fn handle_command(
    source: &impl RecordSource,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::FetchRecords => match source.list_records() {
            Ok(records) => event_tx.send(AppEvent::RecordsFetched(records))?,
            Err(e) => event_tx.send(AppEvent::RecordsFetchFailed(e.to_string()))?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::{model::RecordDto, source::FetchError};

    struct FixedSource(Vec<RecordDto>);

    impl RecordSource for FixedSource {
        fn list_records(&self) -> Result<Vec<RecordDto>, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    impl RecordSource for BrokenSource {
        fn list_records(&self) -> Result<Vec<RecordDto>, FetchError> {
            Err(FetchError::new("connection refused"))
        }
    }

    fn sample() -> Vec<RecordDto> {
        vec![RecordDto {
            file_name: "OceanMan.mp3".to_string(),
            song_title: "Ocean Man".to_string(),
            artist_name: "Ween".to_string(),
            album_name: "Mollusk".to_string(),
            track_number: 13,
            year: 1997,
        }]
    }

    #[test]
    fn fetch_reports_records_on_success() {
        let (event_tx, event_rx) = mpsc::channel();
        let source = FixedSource(sample());

        handle_command(&source, AppCommand::FetchRecords, &event_tx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::RecordsFetched(records) => {
                assert_eq!(records, sample());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn fetch_reports_failure_as_an_event() {
        let (event_tx, event_rx) = mpsc::channel();

        handle_command(&BrokenSource, AppCommand::FetchRecords, &event_tx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::RecordsFetchFailed(message) => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
