//! File loaders for boards, configuration and transcripts.
//!
//! Every loader returns [`LoadResult`], with the offending path in the
//! error context.

pub mod board;
pub mod config;
pub mod transcript;

pub use board::BoardLoader;
pub use config::ConfigLoader;
pub use transcript::TranscriptLoader;

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Writes `contents` next to `path` first, then renames it into place.
pub(crate) fn write_file(path: &Path, contents: &str) -> LoadResult<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write file {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move {} into place", path.display()))?;
    Ok(())
}
