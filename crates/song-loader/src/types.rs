//! Core domain types for the song catalog.
//!
//! A catalog row carries a handful of recognized columns. Every one of them
//! is optional in the source file, so each is stored as `Option<String>` and
//! read back through an accessor that treats absence as the empty string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Column Names
// =============================================================================
// Header names as they appear in the catalog file.

pub const TITLE: &str = "Title";
pub const ARTIST: &str = "Artist";
pub const KEY: &str = "Key";
pub const DATE: &str = "Date";
/// Tag column. The odd name comes straight from the data file.
pub const EM_A: &str = "Em&a";
pub const PLAYLISTS: &str = "Playlists";
pub const SUIT: &str = "Suit";
pub const PROGRESSION: &str = "Progression";
pub const NOTES: &str = "Notes";
pub const TIME_SIGNATURE: &str = "Time Signature";

// =============================================================================
// Song
// =============================================================================

/// One row of the catalog.
///
/// Songs have no identity of their own; they are positional within the
/// loaded catalog and never change after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Artist", skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Release year, kept in its string form
    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "Em&a", skip_serializing_if = "Option::is_none")]
    pub em_a: Option<String>,
    /// Free text holding zero or more playlist markers
    #[serde(rename = "Playlists", skip_serializing_if = "Option::is_none")]
    pub playlists: Option<String>,
    #[serde(rename = "Suit", skip_serializing_if = "Option::is_none")]
    pub suit: Option<String>,
    #[serde(rename = "Progression", skip_serializing_if = "Option::is_none")]
    pub progression: Option<String>,
    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "Time Signature", skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<String>,
    /// Columns with headers we don't recognize, keyed by header
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Song {
    pub fn title(&self) -> &str {
        field(&self.title)
    }

    pub fn artist(&self) -> &str {
        field(&self.artist)
    }

    pub fn key(&self) -> &str {
        field(&self.key)
    }

    pub fn date(&self) -> &str {
        field(&self.date)
    }

    pub fn em_a(&self) -> &str {
        field(&self.em_a)
    }

    pub fn playlists(&self) -> &str {
        field(&self.playlists)
    }

    pub fn suit(&self) -> &str {
        field(&self.suit)
    }

    pub fn progression(&self) -> &str {
        field(&self.progression)
    }

    pub fn notes(&self) -> &str {
        field(&self.notes)
    }

    pub fn time_signature(&self) -> &str {
        field(&self.time_signature)
    }

    /// Store `value` under the column named `header`.
    ///
    /// Unknown headers go to `extra`. A repeated header overwrites the
    /// earlier value.
    pub fn set_field(&mut self, header: &str, value: impl Into<String>) {
        let value = value.into();
        let slot = match header {
            TITLE => &mut self.title,
            ARTIST => &mut self.artist,
            KEY => &mut self.key,
            DATE => &mut self.date,
            EM_A => &mut self.em_a,
            PLAYLISTS => &mut self.playlists,
            SUIT => &mut self.suit,
            PROGRESSION => &mut self.progression,
            NOTES => &mut self.notes,
            TIME_SIGNATURE => &mut self.time_signature,
            _ => {
                self.extra.insert(header.to_string(), value);
                return;
            }
        };
        *slot = Some(value);
    }

    /// Look up a column by header name, recognized or not
    pub fn get_field(&self, header: &str) -> &str {
        match header {
            TITLE => self.title(),
            ARTIST => self.artist(),
            KEY => self.key(),
            DATE => self.date(),
            EM_A => self.em_a(),
            PLAYLISTS => self.playlists(),
            SUIT => self.suit(),
            PROGRESSION => self.progression(),
            NOTES => self.notes(),
            TIME_SIGNATURE => self.time_signature(),
            _ => self.extra.get(header).map(String::as_str).unwrap_or(""),
        }
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

// =============================================================================
// SongCatalog
// =============================================================================

/// The loaded catalog: header row plus songs in file order.
#[derive(Debug, Clone, Default)]
pub struct SongCatalog {
    pub(crate) headers: Vec<String>,
    pub(crate) songs: Vec<Song>,
}

impl SongCatalog {
    pub fn new(headers: Vec<String>, songs: Vec<Song>) -> Self {
        Self { headers, songs }
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All songs, in the order they were loaded
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Song at a zero-based position
    pub fn get(&self, position: usize) -> Option<&Song> {
        self.songs.get(position)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_read_as_empty() {
        let song = Song::default();
        assert_eq!(song.title(), "");
        assert_eq!(song.key(), "");
        assert_eq!(song.playlists(), "");
        assert_eq!(song.get_field("Tempo"), "");
    }

    #[test]
    fn test_set_field_routes_headers() {
        let mut song = Song::default();
        song.set_field("Title", "Let It Be");
        song.set_field("Em&a", "x");
        song.set_field("Tempo", "72");

        assert_eq!(song.title.as_deref(), Some("Let It Be"));
        assert_eq!(song.em_a(), "x");
        assert_eq!(song.get_field("Em&a"), "x");
        assert_eq!(song.extra.get("Tempo").map(String::as_str), Some("72"));
    }

    #[test]
    fn test_tag_column_name_is_exact() {
        let mut song = Song::default();
        song.set_field("Em&A", "y");

        assert!(song.em_a.is_none());
        assert_eq!(song.get_field("Em&A"), "y");
        assert_eq!(song.get_field("Em&a"), "");
    }

    #[test]
    fn test_repeated_header_last_wins() {
        let mut song = Song::default();
        song.set_field("Key", "C");
        song.set_field("Key", "G");
        assert_eq!(song.key(), "G");
    }
}
