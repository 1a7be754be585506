//! Core traits for the filter engine.
//!
//! This module defines the SongFilter trait that lets each criterion be
//! written as its own small type and chained in a FilterPipeline.

use song_loader::Song;

/// A single predicate over songs.
///
/// ## Design Note
/// - `Send + Sync` so filters can be shared between independent views
/// - Filters work on borrowed songs and never mutate them
/// - `apply` keeps the relative order of its input
pub trait SongFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `song` passes this filter
    fn matches(&self, song: &Song) -> bool;

    /// Keep the songs that pass, in their original order.
    fn apply<'a>(&self, songs: Vec<&'a Song>) -> Vec<&'a Song> {
        songs.into_iter().filter(|song| self.matches(song)).collect()
    }
}
