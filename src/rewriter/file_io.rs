//! # File I/O Module
//!
//! Synchronous file operations used by the rewriter. Every error carries the
//! offending path as context.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the rewriter.
pub struct FileIO;

impl FileIO {
  /// Returns the size of the file in bytes, as reported by its metadata.
  pub fn file_size(path: &Path) -> Result<u64> {
    let metadata = std::fs::metadata(path).with_context(|| format!("Failed to stat file: {}", path.display()))?;
    Ok(metadata.len())
  }

  /// Reads the full file as UTF-8.
  ///
  /// Invalid UTF-8 is an error, not something to recover from: rewriting a
  /// lossily decoded file would corrupt it.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Truncates the file and writes `content` in its place.
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
