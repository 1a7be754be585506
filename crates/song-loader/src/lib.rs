//! # Song Loader Crate
//!
//! This crate loads the song catalog from its comma-separated file.
//!
//! ## Main Components
//!
//! - **types**: The `Song` record and the `SongCatalog` that holds them
//! - **parser**: Split catalog text into header-keyed records
//! - **catalog**: Load a catalog from disk
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use song_loader::SongCatalog;
//! use std::path::Path;
//!
//! let catalog = SongCatalog::load_from_file(Path::new("songDB.csv"))?;
//! for song in catalog.songs() {
//!     println!("{} by {}", song.title(), song.artist());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod catalog;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Song, SongCatalog};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = SongCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn test_catalog_positions() {
        let mut first = Song::default();
        first.set_field("Title", "One");
        let mut second = Song::default();
        second.set_field("Title", "Two");

        let catalog = SongCatalog::new(vec!["Title".to_string()], vec![first, second]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title(), "Two");
        assert!(catalog.get(2).is_none());
    }
}
