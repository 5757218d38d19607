//! # Chatchunk
//!
//! A Rust library for preparing archived group-chat dumps for LLM summarization.
//!
//! ## Overview
//!
//! A dump holds messages grouped by topic (a forum thread or a plain channel).
//! Chatchunk:
//! - loads the dump into a [`Repository`](core::Repository) with a global
//!   message-id index, so replies can be resolved across topics
//! - splits a message stream into titled [`Chunk`](core::Chunk)s, either by
//!   count or by folding ISO weeks together
//! - renders messages as plain text, quoting the message each reply points at
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatchunk::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let repo = Repository::from_path("dump.json")?;
//!     let messages = repo.gather(&[]);
//!
//!     let config = ChunkConfig::new().with_mode(SplitMode::Week);
//!     let chunks = partition(&messages, &config)?;
//!
//!     let formatter = Formatter::new(&repo);
//!     for chunk in &chunks {
//!         println!("{}", formatter.format_chunk(chunk, &FormatOptions::default()));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] - [`Message`], record decoding and timestamp helpers
//! - [`parsing`] - the raw dump shape and topic-name files
//! - [`config`] - [`ChunkConfig`](config::ChunkConfig), [`SplitMode`](config::SplitMode),
//!   [`FormatOptions`](config::FormatOptions)
//! - [`core`] - repository, partitioning, rendering, statistics and writers
//! - [`format`] - output format selection
//! - [`error`] - [`ChatchunkError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parsing;

pub use error::{ChatchunkError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatchunk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::error::{ChatchunkError, Result};
    pub use crate::message::{MessageId, TopicId};

    pub use crate::config::{ChunkConfig, FormatOptions, SplitMode};
    pub use crate::parsing::RawExport;

    pub use crate::core::{
        Chunk, ChunkStats, Formatter, PartitionStats, Repository, Topic, partition,
    };

    pub use crate::core::output::{to_json, to_jsonl, to_text, write_json, write_jsonl, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
