//! Entry points of the filter engine.
//!
//! Both functions are pure: they borrow the song list, never modify it, and
//! return the matching songs in their original relative order.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::PlaylistFilter;
use crate::playlist::Playlist;
use crate::traits::SongFilter;
use song_loader::Song;

/// Songs matching every active criterion.
///
/// - `key`, `artist`, `year`, `em_a`: the column must equal the criterion
///   exactly (case-sensitive); a missing column reads as ""
/// - `search`: the lower-cased query must occur in the lower-cased title or
///   artist
///
/// Empty criteria impose no constraint, so the default criteria return all
/// songs.
pub fn apply_filters<'a>(songs: &'a [Song], criteria: &FilterCriteria) -> Vec<&'a Song> {
    FilterPipeline::from_criteria(criteria).apply(songs)
}

/// Songs on the playlist named by `playlist_name`.
///
/// `"8-track"` selects songs marked `8-Track`; any other name selects songs
/// marked `My Deck`.
pub fn get_playlist_songs<'a>(songs: &'a [Song], playlist_name: &str) -> Vec<&'a Song> {
    playlist_songs(songs, Playlist::from_token(playlist_name))
}

/// Songs whose `Playlists` column contains the marker of `playlist`
pub fn playlist_songs(songs: &[Song], playlist: Playlist) -> Vec<&Song> {
    tracing::debug!("Selecting playlist {}", playlist);
    PlaylistFilter::new(playlist).apply(songs.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::song;

    #[test]
    fn test_beatles_example() {
        let songs = vec![
            song(&[("Title", "Let It Be"), ("Artist", "Beatles"), ("Key", "C"), ("Date", "1970")]),
            song(&[("Title", "Yesterday"), ("Artist", "Beatles"), ("Key", "F"), ("Date", "1965")]),
        ];
        let criteria = FilterCriteria {
            artist: "Beatles".to_string(),
            search: "yesterday".to_string(),
            ..Default::default()
        };

        let result = apply_filters(&songs, &criteria);
        assert_eq!(result, vec![&songs[1]]);
    }

    #[test]
    fn test_playlist_selection() {
        let songs = vec![
            song(&[("Title", "A"), ("Playlists", "8-Track")]),
            song(&[("Title", "B"), ("Playlists", "My Deck")]),
            song(&[("Title", "C")]),
        ];

        let eight = get_playlist_songs(&songs, "8-track");
        assert_eq!(eight, vec![&songs[0]]);

        let deck = get_playlist_songs(&songs, "deck");
        assert_eq!(deck, vec![&songs[1]]);

        assert_eq!(playlist_songs(&songs, Playlist::EightTrack), eight);
    }
}
