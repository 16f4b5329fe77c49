//! Whitelist file loading
//!
//! Reads a whitelist file into an ordered sequence of lines, one entry
//! per text line with the trailing newline (and carriage return)
//! stripped. The master whitelist is optional: no path means an empty
//! baseline.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a whitelist
#[derive(Debug, Error)]
pub enum WhitelistError {
    /// Whitelist file does not exist
    #[error("whitelist file not found: {0}")]
    NotFound(PathBuf),

    /// IO error while reading the file
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
}

/// Read a whitelist file into its lines
///
/// Line order is preserved. Empty lines are kept: they are entries like
/// any other as far as the validator is concerned.
pub fn read_lines(path: &Path) -> Result<Vec<String>, WhitelistError> {
    if !path.exists() {
        return Err(WhitelistError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| WhitelistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(ToString::to_string).collect())
}

/// Read an optional whitelist file; no path means an empty list
pub fn read_optional(path: Option<&Path>) -> Result<Vec<String>, WhitelistError> {
    path.map_or_else(|| Ok(Vec::new()), read_lines)
}
