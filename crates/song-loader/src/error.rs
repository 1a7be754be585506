//! Error types for the song-loader crate.
//!
//! Only loading can fail. Once a catalog is in memory, every query over it
//! is infallible.

use thiserror::Error;

/// Errors that can occur while loading a song catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file does not exist
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input had no header row to name the columns
    #[error("Missing header row in {source_name}")]
    MissingHeader { source_name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
