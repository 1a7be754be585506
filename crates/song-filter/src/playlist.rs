//! The two playlists a song can be tagged with.

use std::fmt;
use std::str::FromStr;

/// Token that selects the 8-Track playlist. Anything else means My Deck.
pub const EIGHT_TRACK_TOKEN: &str = "8-track";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Playlist {
    EightTrack,
    MyDeck,
}

impl Playlist {
    /// Map a playlist token to a playlist.
    ///
    /// This is a binary choice: only `"8-track"` selects `EightTrack`, every
    /// other token (including the empty string) selects `MyDeck`.
    pub fn from_token(token: &str) -> Self {
        if token == EIGHT_TRACK_TOKEN {
            Playlist::EightTrack
        } else {
            Playlist::MyDeck
        }
    }

    /// Text that marks membership inside a song's `Playlists` field
    pub fn marker(&self) -> &'static str {
        match self {
            Playlist::EightTrack => "8-Track",
            Playlist::MyDeck => "My Deck",
        }
    }
}

impl FromStr for Playlist {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Playlist::from_token(s))
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_mapping() {
        assert_eq!(Playlist::from_token("8-track"), Playlist::EightTrack);
        assert_eq!(Playlist::from_token("deck"), Playlist::MyDeck);
        assert_eq!(Playlist::from_token("8-Track"), Playlist::MyDeck);
        assert_eq!(Playlist::from_token(""), Playlist::MyDeck);
    }

    #[test]
    fn test_markers() {
        assert_eq!(Playlist::EightTrack.marker(), "8-Track");
        assert_eq!(Playlist::MyDeck.to_string(), "My Deck");
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("8-track".parse::<Playlist>(), Ok(Playlist::EightTrack));
        assert_eq!("deck".parse::<Playlist>(), Ok(Playlist::MyDeck));
    }
}
