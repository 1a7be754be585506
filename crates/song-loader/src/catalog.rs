//! Loading a SongCatalog from disk.

use crate::error::Result;
use crate::parser;
use crate::types::SongCatalog;
use std::path::Path;

impl SongCatalog {
    /// Load the catalog from a comma-separated file.
    ///
    /// This is the main entry point for loading data. The file is read once
    /// and the resulting catalog is never modified.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading song catalog from {}", path.display());

        let catalog = parser::parse_catalog_file(path)?;

        tracing::info!(
            "Loaded {} songs ({} columns) from {}",
            catalog.len(),
            catalog.headers().len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog already held in memory
    pub fn from_text(text: &str) -> Result<Self> {
        parser::parse_catalog(text, "<memory>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Title,Artist,Key").unwrap();
        writeln!(file, "Let It Be,Beatles,C").unwrap();
        writeln!(file, "Yesterday,Beatles,F").unwrap();

        let catalog = SongCatalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title(), "Yesterday");
    }

    #[test]
    fn test_load_empty_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(SongCatalog::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_text() {
        let catalog = SongCatalog::from_text("Title\nA\nB\n").unwrap();
        let titles: Vec<&str> = catalog.songs().iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }
}
