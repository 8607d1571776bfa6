//! Whole-file read and overwrite for patched sources.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the full text of a source file.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Overwrite a source file in place. No temp file, no backup.
pub fn write_source(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
