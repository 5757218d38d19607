//! Chunk output writers.
//!
//! - [`write_text`] / [`to_text`] - rendered chat text, one section per chunk
//! - [`write_json`] / [`to_json`] - JSON array of chunks
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one chunk per line (best for pipelines)
//! - [`write_csv`] / [`to_csv`] - one row per message, semicolon-delimited - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatchunk::Result<()> {
//! use chatchunk::config::{ChunkConfig, FormatOptions};
//! use chatchunk::core::output::{to_text, write_jsonl};
//! use chatchunk::core::{Formatter, Repository, partition};
//!
//! let repo = Repository::from_path("dump.json")?;
//! let chunks = partition(&repo.gather(&[]), &ChunkConfig::new())?;
//!
//! write_jsonl(&chunks, "chunks.jsonl")?;
//! let text = to_text(&chunks, &Formatter::new(&repo), &FormatOptions::default());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod json_writer;
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use json_writer::{to_json, write_json};
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{chunk_heading, to_text, write_text};

use serde::Serialize;

use crate::message::Message;

use super::models::Chunk;

/// Serialized shape of a chunk in JSON and JSONL output.
#[derive(Serialize)]
struct ChunkRecord<'a> {
    index: usize,
    title: &'a str,
    message_count: usize,
    messages: &'a [Message],
}

impl<'a> ChunkRecord<'a> {
    fn new(index: usize, chunk: &'a Chunk) -> Self {
        Self {
            index,
            title: &chunk.title,
            message_count: chunk.len(),
            messages: &chunk.messages,
        }
    }
}
