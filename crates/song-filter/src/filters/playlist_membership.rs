//! Filter on playlist membership.

use crate::playlist::Playlist;
use crate::traits::SongFilter;
use song_loader::Song;

/// Keeps songs whose `Playlists` column contains the playlist's marker.
///
/// This is a plain substring test, so a marker buried in unrelated text
/// still counts as membership.
pub struct PlaylistFilter {
    playlist: Playlist,
}

impl PlaylistFilter {
    pub fn new(playlist: Playlist) -> Self {
        Self { playlist }
    }
}

impl SongFilter for PlaylistFilter {
    fn name(&self) -> &str {
        "PlaylistFilter"
    }

    fn matches(&self, song: &Song) -> bool {
        song.playlists().contains(self.playlist.marker())
    }
}
