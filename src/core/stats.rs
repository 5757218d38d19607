//! Size statistics for messages and chunks.
//!
//! Word and punctuation counts give a rough, tokenizer-independent idea of
//! how much text a chunk will feed into a summarizer.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Serialize;

use crate::message::{Message, optional_timestamp_format};

use super::models::Chunk;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));
static PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Word and punctuation counts of a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Runs of letters, digits and underscores
    pub words: usize,
    /// Characters that are neither word characters nor whitespace
    pub punctuation: usize,
}

impl std::ops::Add for TextStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            words: self.words + other.words,
            punctuation: self.punctuation + other.punctuation,
        }
    }
}

/// Counts words (`\w+`) and punctuation/special characters (`[^\w\s]`).
///
/// # Example
///
/// ```rust
/// use chatchunk::core::stats::count_words_and_punctuation;
///
/// let stats = count_words_and_punctuation("Hello, world! Привет.");
/// assert_eq!(stats.words, 3);
/// assert_eq!(stats.punctuation, 3);
/// ```
pub fn count_words_and_punctuation(text: &str) -> TextStats {
    TextStats {
        words: WORD_RE.find_iter(text).count(),
        punctuation: PUNCT_RE.find_iter(text).count(),
    }
}

/// Summary of a single chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkStats {
    pub title: String,
    pub messages: usize,
    pub text: TextStats,
    #[serde(serialize_with = "optional_timestamp_format::serialize")]
    pub first_timestamp: Option<NaiveDateTime>,
    #[serde(serialize_with = "optional_timestamp_format::serialize")]
    pub last_timestamp: Option<NaiveDateTime>,
}

impl ChunkStats {
    pub fn from_chunk(chunk: &Chunk) -> Self {
        Self {
            title: chunk.title.clone(),
            messages: chunk.len(),
            text: text_stats(&chunk.messages),
            first_timestamp: chunk.first_timestamp(),
            last_timestamp: chunk.last_timestamp(),
        }
    }
}

/// Summary of one partition call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitionStats {
    pub chunks: usize,
    pub messages: usize,
    pub largest_chunk: usize,
    pub smallest_chunk: usize,
    pub text: TextStats,
}

impl PartitionStats {
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        let sizes = chunks.iter().map(Chunk::len);
        Self {
            chunks: chunks.len(),
            messages: sizes.clone().sum(),
            largest_chunk: sizes.clone().max().unwrap_or(0),
            smallest_chunk: sizes.min().unwrap_or(0),
            text: chunks
                .iter()
                .map(|chunk| text_stats(&chunk.messages))
                .fold(TextStats::default(), |acc, s| acc + s),
        }
    }

    /// Mean messages per chunk.
    pub fn average_chunk_size(&self) -> f64 {
        if self.chunks == 0 {
            return 0.0;
        }
        self.messages as f64 / self.chunks as f64
    }
}

fn text_stats(messages: &[Message]) -> TextStats {
    messages
        .iter()
        .map(|msg| count_words_and_punctuation(&msg.text))
        .fold(TextStats::default(), |acc, s| acc + s)
}
