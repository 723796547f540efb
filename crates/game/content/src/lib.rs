//! Board files, configuration files and transcript documents.
//!
//! This crate converts between the on-disk formats and `wumpus-core` types:
//! - Board files (dotted and compact layouts) into a [`Board`], and back
//! - Transcripts to and from the `ACTION row col` text form
//! - JSON transcript documents for downstream tools
//! - Agent configuration from TOML
//!
//! Parsing and formatting work on strings and are always available. The
//! file loaders sit behind the `loaders` feature.

pub mod board;
pub mod transcript;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use board::{Board, BoardError, BoardFormat};
pub use transcript::{TranscriptError, parse_transcript, write_transcript};

#[cfg(feature = "serde")]
pub use transcript::TranscriptDocument;

#[cfg(feature = "loaders")]
pub use loaders::{BoardLoader, ConfigLoader, LoadResult, TranscriptLoader};
