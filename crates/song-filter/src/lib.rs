//! Filter engine for the song catalog.
//!
//! This crate provides:
//! - FilterCriteria, the plain record of what the user asked for
//! - SongFilter trait and implementations, one per kind of constraint
//! - FilterPipeline for composing filters with AND semantics
//! - `apply_filters` and `get_playlist_songs`, the two query entry points
//!
//! Nothing here reads global state. Callers gather control values themselves
//! and pass a FilterCriteria in.
//!
//! ## Example Usage
//! ```ignore
//! use song_filter::{apply_filters, get_playlist_songs, FilterCriteria};
//!
//! let criteria = FilterCriteria {
//!     artist: "Beatles".to_string(),
//!     search: "yesterday".to_string(),
//!     ..Default::default()
//! };
//! let matching = apply_filters(catalog.songs(), &criteria);
//! let deck = get_playlist_songs(catalog.songs(), "deck");
//! ```

pub mod traits;
pub mod criteria;
pub mod playlist;
pub mod filters;
pub mod filter_pipeline;
pub mod engine;

// Re-export main types
pub use traits::SongFilter;
pub use criteria::{ControlValues, FilterCriteria};
pub use playlist::Playlist;
pub use filter_pipeline::FilterPipeline;
pub use engine::{apply_filters, get_playlist_songs, playlist_songs};
