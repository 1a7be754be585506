//! Exact-match filter over a single column.
//!
//! Used for key, artist, year and the Em&a tag. Comparison is
//! case-sensitive and a missing column compares as "".

use crate::traits::SongFilter;
use song_loader::Song;

/// Columns that support exact matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongField {
    Key,
    Artist,
    /// The `Date` column, compared in its string form
    Year,
    EmA,
}

impl SongField {
    fn read(self, song: &Song) -> &str {
        match self {
            SongField::Key => song.key(),
            SongField::Artist => song.artist(),
            SongField::Year => song.date(),
            SongField::EmA => song.em_a(),
        }
    }
}

/// Keeps songs whose column equals `expected` verbatim.
pub struct ExactFieldFilter {
    field: SongField,
    expected: String,
}

impl ExactFieldFilter {
    pub fn new(field: SongField, expected: impl Into<String>) -> Self {
        Self {
            field,
            expected: expected.into(),
        }
    }
}

impl SongFilter for ExactFieldFilter {
    fn name(&self) -> &str {
        match self.field {
            SongField::Key => "KeyFilter",
            SongField::Artist => "ArtistFilter",
            SongField::Year => "YearFilter",
            SongField::EmA => "EmAFilter",
        }
    }

    fn matches(&self, song: &Song) -> bool {
        self.field.read(song) == self.expected
    }
}
