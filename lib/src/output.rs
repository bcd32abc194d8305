//! Saving rendered art to disk

use crate::ascii::AsciiArt;
use crate::error::{AsciiError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory used when the caller does not pick one
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Extension appended to every saved file
pub const OUTPUT_EXTENSION: &str = "txt";

/// Make a user-supplied name safe to use as a single path component
///
/// Path separators, `:` and control characters become `_`. Empty names and
/// names made only of dots are rejected.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return Err(AsciiError::InvalidFilename(name.to_string()));
    }
    Ok(cleaned)
}

/// `dir/<name>.txt` for a sanitized `name`
pub fn output_path(dir: &Path, name: &str) -> Result<PathBuf> {
    let stem = sanitize_filename(name)?;
    Ok(dir.join(format!("{}.{}", stem, OUTPUT_EXTENSION)))
}

/// Write `art` to `dir/<name>.txt`, creating `dir` if needed
///
/// Existing files are overwritten. Returns the path written.
pub fn save_art(art: &AsciiArt, dir: &Path, name: &str) -> Result<PathBuf> {
    let path = output_path(dir, name)?;

    fs::create_dir_all(dir).map_err(|source| AsciiError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::write(&path, art.as_str()).map_err(|source| AsciiError::Write {
        path: path.clone(),
        source,
    })?;

    log::info!("saved {} lines to {}", art.height(), path.display());
    Ok(path)
}
