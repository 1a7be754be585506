//! The FilterPipeline chains filters together.
//!
//! Filters run in the order they were added; a song survives only if every
//! filter keeps it, which gives the AND semantics of the criteria.

use crate::criteria::FilterCriteria;
use crate::filters::{ExactFieldFilter, SearchFilter, SongField};
use crate::traits::SongFilter;
use song_loader::Song;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExactFieldFilter::new(SongField::Artist, "Beatles"))
///     .add_filter(SearchFilter::new("yesterday"));
///
/// let matching = pipeline.apply(catalog.songs());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn SongFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build a pipeline holding one filter per active criterion.
    ///
    /// Empty criteria add nothing, so an empty `FilterCriteria` yields an
    /// empty pipeline that keeps every song.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let exact = [
            (SongField::Key, &criteria.key),
            (SongField::Artist, &criteria.artist),
            (SongField::Year, &criteria.year),
            (SongField::EmA, &criteria.em_a),
        ];

        let mut pipeline = Self::new();
        for (field, expected) in exact {
            if !expected.is_empty() {
                pipeline = pipeline.add_filter(ExactFieldFilter::new(field, expected.as_str()));
            }
        }
        if !criteria.search.is_empty() {
            pipeline = pipeline.add_filter(SearchFilter::new(&criteria.search));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl SongFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// Returns references into `songs`, in their original order.
    pub fn apply<'a>(&self, songs: &'a [Song]) -> Vec<&'a Song> {
        let mut current: Vec<&'a Song> = songs.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
