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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: the music
//! file records served by the catalog endpoint and their identified
//! client-side form, together with the view state that manages them.

pub(crate) mod records;

use serde::Deserialize;

/// A music file entry as served by the catalog endpoint.
///
/// This is the wire shape. The server assigns no identity; ids are minted
/// client-side when a fetch completes (see [`records::RecordList`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDto {
    pub file_name: String,
    pub song_title: String,
    pub artist_name: String,
    pub album_name: String,
    pub track_number: i32,
    pub year: i32,
}

/// An identified music file record held by the client.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: i32,
    pub file_name: String,
    pub song_title: String,
    pub artist_name: String,
    pub album_name: String,
    pub track_number: i32,
    pub year: i32,
}
