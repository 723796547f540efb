//! Transcript files, as text or JSON documents.

use std::path::Path;

use anyhow::Context;
use wumpus_core::Transcript;

use crate::loaders::{LoadResult, read_file, write_file};
use crate::transcript::{TranscriptDocument, parse_transcript, write_transcript};

/// Loader and writer for transcript files.
pub struct TranscriptLoader;

impl TranscriptLoader {
    /// Load a text transcript.
    pub fn load(path: &Path) -> LoadResult<Transcript> {
        let content = read_file(path)?;
        parse_transcript(&content)
            .with_context(|| format!("Invalid transcript file {}", path.display()))
    }

    /// Save the text form.
    pub fn save_text(path: &Path, transcript: &Transcript) -> LoadResult<()> {
        let mut buffer = Vec::new();
        write_transcript(transcript, &mut buffer).context("Failed to format transcript")?;
        let text = String::from_utf8(buffer).context("Transcript is not valid UTF-8")?;
        write_file(path, &text)
    }

    /// Save a pretty-printed JSON document.
    pub fn save_json(path: &Path, document: &TranscriptDocument) -> LoadResult<()> {
        let json = serde_json::to_string_pretty(document)
            .context("Failed to serialize transcript document")?;
        write_file(path, &json)
    }

    /// Load a JSON document written by [`save_json`](Self::save_json).
    pub fn load_json(path: &Path) -> LoadResult<TranscriptDocument> {
        let json = read_file(path)?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid transcript document {}", path.display()))
    }
}
