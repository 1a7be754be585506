//! Filter implementations for the song list.
//!
//! This module contains all the concrete filters that can be composed
//! into a FilterPipeline.

pub mod exact_field;
pub mod playlist_membership;
pub mod search;

// Re-export for convenience
pub use exact_field::{ExactFieldFilter, SongField};
pub use playlist_membership::PlaylistFilter;
pub use search::SearchFilter;

#[cfg(test)]
pub(crate) fn song(fields: &[(&str, &str)]) -> song_loader::Song {
    let mut song = song_loader::Song::default();
    for (header, value) in fields {
        song.set_field(header, *value);
    }
    song
}
