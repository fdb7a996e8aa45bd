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

//! Record source boundary.
//!
//! The catalog server exposes a single endpoint returning the full record
//! list as a JSON array. This module defines the trait the command worker
//! consumes and its HTTP implementation. No caching or retry logic lives
//! here: one request, one result.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::model::RecordDto;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// The single failure mode of the source: the fetch did not produce a
/// valid record list. Transport errors, non-success statuses and
/// undecodable payloads all collapse into this.
#[derive(Debug, Error)]
#[error("fetch failed: {0}")]
pub(crate) struct FetchError(String);

impl FetchError {
    #[cfg(test)]
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self(e.to_string())
    }
}

/// A provider of the catalog record list.
pub(crate) trait RecordSource {
    fn list_records(&self) -> Result<Vec<RecordDto>, FetchError>;
}

/// Fetches records from the catalog server over HTTP.
pub(crate) struct HttpRecordSource {
    client: Client,
    url: String,
}

impl HttpRecordSource {
    pub(crate) fn new(url: String) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client, url })
    }
}

impl RecordSource for HttpRecordSource {
    /// Performs the `GET` and decodes the body into the DTO shape.
    ///
    /// The payload is validated by the typed decode; a body that is not a
    /// JSON array of well-formed records is a fetch failure, the same as
    /// a refused connection or an error status.
    fn list_records(&self) -> Result<Vec<RecordDto>, FetchError> {
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        let records = response.json::<Vec<RecordDto>>()?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::RecordDto;

    #[test]
    fn decodes_the_wire_shape() {
        let payload = r#"[{
            "fileName": "OceanMan.mp3",
            "songTitle": "Ocean Man",
            "artistName": "Ween",
            "albumName": "Mollusk",
            "trackNumber": 13,
            "year": 1997
        }]"#;

        let records: Vec<RecordDto> = serde_json::from_str(payload).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_name, "OceanMan.mp3");
        assert_eq!(records[0].song_title, "Ocean Man");
        assert_eq!(records[0].track_number, 13);
        assert_eq!(records[0].year, 1997);
    }

    #[test]
    fn decodes_an_empty_catalog() {
        let records: Vec<RecordDto> = serde_json::from_str("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_a_payload_missing_fields() {
        let payload = r#"[{ "fileName": "OceanMan.mp3" }]"#;
        assert!(serde_json::from_str::<Vec<RecordDto>>(payload).is_err());
    }

    #[test]
    fn rejects_a_payload_of_the_wrong_shape() {
        let payload = r#"{ "records": [] }"#;
        assert!(serde_json::from_str::<Vec<RecordDto>>(payload).is_err());
    }
}
