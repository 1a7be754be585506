//! Parser for the comma-separated song catalog.
//!
//! Format: the first non-empty line names the columns, every later line is
//! split on `,` and zipped positionally against those names.
//!
//! There is no quoting or escaping, so a comma inside a value always starts
//! a new cell.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::path::Path;

/// Parse catalog text into headers and songs.
///
/// `source_name` is only used in error messages and logs.
///
/// Rows are handled like this:
/// - surrounding whitespace of the whole text is dropped once, otherwise
///   cells are taken verbatim
/// - a short row leaves its trailing columns absent
/// - cells past the last header are dropped
/// - blank lines are skipped
pub fn parse_catalog(text: &str, source_name: &str) -> Result<SongCatalog> {
    let mut lines = text
        .trim()
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or_else(|| CatalogError::MissingHeader {
        source_name: source_name.to_string(),
    })?;
    let headers: Vec<String> = split_row(header_line).map(str::to_string).collect();

    let mut songs = Vec::new();
    for (idx, line) in lines {
        let cells: Vec<&str> = split_row(line).collect();
        if cells.len() > headers.len() {
            tracing::warn!(
                "{}:{}: {} cells for {} columns, extra cells ignored",
                source_name,
                idx + 1,
                cells.len(),
                headers.len()
            );
        }

        let mut song = Song::default();
        for (header, cell) in headers.iter().zip(cells) {
            song.set_field(header, cell);
        }
        songs.push(song);
    }

    Ok(SongCatalog::new(headers, songs))
}

/// Read and parse a catalog file
pub fn parse_catalog_file(path: &Path) -> Result<SongCatalog> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    parse_catalog(&text, &path.display().to_string())
}

fn split_row(line: &str) -> impl Iterator<Item = &str> {
    line.split(',')
}
