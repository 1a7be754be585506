//! Filter criteria and the control values they are read from.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// Identifiers of the input controls that supply each criterion.
pub const FILTER_KEY: &str = "filterKey";
pub const FILTER_ARTIST: &str = "filterArtist";
pub const FILTER_YEAR: &str = "filterYear";
pub const FILTER_EM_A: &str = "filterEmA";
pub const SEARCH_SONG: &str = "searchSong";

/// The active constraints for one query.
///
/// An empty field places no constraint on its dimension. All non-empty
/// fields must hold at once; there is no OR and no negation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub key: String,
    pub artist: String,
    pub year: String,
    #[serde(rename = "emA")]
    pub em_a: String,
    pub search: String,
}

impl FilterCriteria {
    /// Read every criterion from a set of control values.
    ///
    /// A control that is missing reads as the empty string.
    pub fn from_controls<C: ControlValues + ?Sized>(controls: &C) -> Self {
        let read = |id: &str| controls.value(id).unwrap_or("").to_string();
        Self {
            key: read(FILTER_KEY),
            artist: read(FILTER_ARTIST),
            year: read(FILTER_YEAR),
            em_a: read(FILTER_EM_A),
            search: read(SEARCH_SONG),
        }
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
            && self.artist.is_empty()
            && self.year.is_empty()
            && self.em_a.is_empty()
            && self.search.is_empty()
    }
}

/// Source of current input-control values, keyed by control id.
pub trait ControlValues {
    fn value(&self, id: &str) -> Option<&str>;
}

impl ControlValues for HashMap<String, String> {
    fn value(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl ControlValues for BTreeMap<String, String> {
    fn value(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn test_from_controls() {
        let mut controls = HashMap::new();
        controls.insert(FILTER_KEY.to_string(), "C".to_string());
        controls.insert(SEARCH_SONG.to_string(), "let".to_string());

        let criteria = FilterCriteria::from_controls(&controls);

        assert_eq!(criteria.key, "C");
        assert_eq!(criteria.search, "let");
        assert_eq!(criteria.artist, "");
        assert_eq!(criteria.year, "");
        assert_eq!(criteria.em_a, "");
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_from_no_controls() {
        let controls: BTreeMap<String, String> = BTreeMap::new();
        assert_eq!(FilterCriteria::from_controls(&controls), FilterCriteria::default());
    }
}
