//! Case-insensitive free-text search over title and artist.

use crate::traits::SongFilter;
use song_loader::Song;

/// Keeps songs whose title or artist contains the query, ignoring case.
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }
}

impl SongFilter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, song: &Song) -> bool {
        song.title().to_lowercase().contains(&self.query)
            || song.artist().to_lowercase().contains(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::song;

    #[test]
    fn test_matches_title_or_artist() {
        let filter = SearchFilter::new("bEAt");

        assert!(filter.matches(&song(&[("Title", "Beat It")])));
        assert!(filter.matches(&song(&[("Artist", "The Beatles")])));
        assert!(!filter.matches(&song(&[("Title", "Help!"), ("Notes", "beat")])));
    }

    #[test]
    fn test_missing_columns_do_not_match() {
        let filter = SearchFilter::new("a");
        assert!(!filter.matches(&song(&[])));
    }
}
