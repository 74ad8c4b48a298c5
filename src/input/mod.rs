//! URL list loading
//!
//! The input format is a newline-delimited UTF-8 file: one URL per line,
//! surrounding whitespace trimmed, blank lines ignored, no comment syntax.
//! File order is the report order.

use crate::{BenchError, Result};
use std::path::Path;

/// Loads the URL list from `path`, preserving file order
///
/// A missing file maps to [`BenchError::InputMissing`], the one condition
/// that is fatal before any fetch occurs.
pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(BenchError::InputMissing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
