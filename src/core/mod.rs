//! Core processing logic for chatchunk.
//!
//! This module contains:
//! - [`repository`] - the loaded corpus and its id index
//! - [`partition`](mod@partition) - count and week chunking strategies
//! - [`render`] - text rendering with reply quotes
//! - [`stats`] - word/punctuation counts and chunk summaries
//! - [`output`] - format writers (text, JSON, JSONL, CSV)
//! - [`models`] - the [`Chunk`] type
//!
//! # Quick Start
//!
//! ```rust
//! use chatchunk::config::{ChunkConfig, FormatOptions, SplitMode};
//! use chatchunk::core::{Formatter, Repository, partition};
//! use chatchunk::parsing::RawExport;
//!
//! let raw = RawExport::from_str(r#"{"messages": {"1": [
//!     [1, "2024-01-15 10:30:00", "Hello", "Alice", null, null, null],
//!     [2, "2024-01-15 10:31:00", "Hi!", "Bob", null, null, 1]
//! ]}}"#)?;
//! let repo = Repository::load(raw)?;
//!
//! let config = ChunkConfig::new().with_mode(SplitMode::Week);
//! let chunks = partition(&repo.gather(&[]), &config)?;
//! assert_eq!(chunks.len(), 1);
//!
//! let text = Formatter::new(&repo).format_chunk(&chunks[0], &FormatOptions::default());
//! assert!(text.contains("> [2024-01-15 10:30:00 from Alice]"));
//! # Ok::<(), chatchunk::ChatchunkError>(())
//! ```

pub mod models;
pub mod output;
pub mod partition;
pub mod render;
pub mod repository;
pub mod stats;

// Re-export main types for convenience
pub use models::Chunk;
pub use partition::partition;
pub use render::Formatter;
pub use repository::{Repository, Topic};
pub use stats::{ChunkStats, PartitionStats, TextStats, count_words_and_punctuation};

// Re-export Message from the crate root
pub use crate::Message;
