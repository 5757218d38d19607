//! Splitting message sequences into chunks.
//!
//! Two strategies, chosen by [`SplitMode`]:
//!
//! - **Count**: `ceil(n / max)` chunks of `ceil(n / chunk_count)` messages
//!   each, the last one holding the remainder. Titles are ordinals.
//! - **Week**: messages are grouped by ISO week, and consecutive weeks are
//!   folded together until the buffer holds at least `min_chunk_size`
//!   messages. Titles list the folded weeks (`"W1W2"`). Whatever is left at
//!   the end is emitted as a final, possibly small, chunk.
//!
//! In both modes an input of at most `max_chunk_size` messages comes back as
//! a single untitled chunk, and an empty input yields no chunks.
//!
//! # Example
//!
//! ```rust
//! use chatchunk::config::{ChunkConfig, SplitMode};
//! use chatchunk::core::partition;
//! use chatchunk::message::{Message, parse_timestamp};
//!
//! let ts = parse_timestamp("2024-01-01 12:00:00")?;
//! let messages: Vec<Message> = (0..450).map(|i| Message::new(i, ts, "Alice", "hi")).collect();
//!
//! let chunks = partition(&messages, &ChunkConfig::new().with_max_chunk_size(200))?;
//! let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
//! assert_eq!(sizes, vec![150, 150, 150]);
//! assert_eq!(chunks[2].title, "2");
//! # Ok::<(), chatchunk::ChatchunkError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::mem;

use crate::config::{ChunkConfig, SplitMode};
use crate::error::Result;
use crate::message::Message;

use super::models::Chunk;

/// Splits `messages` into chunks according to `config`.
///
/// Fails with [`InvalidConfiguration`](crate::ChatchunkError::InvalidConfiguration)
/// before producing anything if the configuration is unusable.
pub fn partition(messages: &[Message], config: &ChunkConfig) -> Result<Vec<Chunk>> {
    config.validate()?;

    if messages.is_empty() {
        return Ok(Vec::new());
    }

    if messages.len() <= config.max_chunk_size {
        tracing::debug!(
            messages = messages.len(),
            max_chunk_size = config.max_chunk_size,
            "input fits in one chunk"
        );
        return Ok(vec![Chunk::new(messages.to_vec(), "")]);
    }

    let chunks = match config.mode {
        SplitMode::Count => split_by_count(messages, config.max_chunk_size),
        SplitMode::Week => {
            let chunks = split_by_week(messages, config.min_chunk_size);
            for chunk in chunks.iter().filter(|c| c.len() > config.max_chunk_size) {
                tracing::warn!(
                    title = %chunk.title,
                    messages = chunk.len(),
                    max_chunk_size = config.max_chunk_size,
                    "week chunk exceeds max chunk size"
                );
            }
            chunks
        }
    };

    tracing::debug!(
        mode = %config.mode,
        messages = messages.len(),
        chunks = chunks.len(),
        "partitioned messages"
    );
    Ok(chunks)
}

/// Evenly sized consecutive slices. Concatenating the result reproduces the input.
fn split_by_count(messages: &[Message], max_chunk_size: usize) -> Vec<Chunk> {
    let chunk_count = messages.len().div_ceil(max_chunk_size);
    let chunk_size = messages.len().div_ceil(chunk_count);

    messages
        .chunks(chunk_size)
        .enumerate()
        .map(|(ordinal, slice)| Chunk::new(slice.to_vec(), ordinal.to_string()))
        .collect()
}

/// Greedy fold of ISO weeks until each buffer reaches `min_chunk_size`.
///
/// Weeks are keyed by `(iso_year, week)` so the same week number in two
/// different years stays apart; titles only show the week number.
fn split_by_week(messages: &[Message], min_chunk_size: usize) -> Vec<Chunk> {
    let mut weeks: BTreeMap<(i32, u32), Vec<Message>> = BTreeMap::new();
    for msg in messages {
        weeks.entry(msg.iso_week()).or_default().push(msg.clone());
    }

    let mut chunks = Vec::new();
    let mut buffer: Vec<Message> = Vec::new();
    let mut title = String::new();

    for ((_, week), group) in weeks {
        buffer.extend(group);
        let _ = write!(title, "W{week}");

        if buffer.len() >= min_chunk_size {
            chunks.push(Chunk::new(mem::take(&mut buffer), mem::take(&mut title)));
        }
    }

    // Trailing weeks that never reached the minimum are still emitted
    if !buffer.is_empty() {
        chunks.push(Chunk::new(buffer, title));
    }

    chunks
}
