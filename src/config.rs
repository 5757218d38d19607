//! Configuration types for partitioning and formatting.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ChunkConfig`] - how a message sequence is split into chunks
//! - [`SplitMode`] - which splitting strategy to use
//! - [`FormatOptions`] - what metadata the text formatter renders
//!
//! # Example
//!
//! ```rust
//! use chatchunk::config::{ChunkConfig, FormatOptions, SplitMode};
//!
//! let chunking = ChunkConfig::new()
//!     .with_mode(SplitMode::Week)
//!     .with_max_chunk_size(150)
//!     .with_min_chunk_size(20);
//!
//! let format = FormatOptions::new().with_forward_info(false);
//! assert!(format.include_reply_quote);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChatchunkError, Result};

/// Default upper bound for count-mode chunks and the single-chunk cutoff.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 200;

/// Default size a week-mode buffer must reach before it is emitted.
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 10;

/// Strategy used to split a message sequence into chunks.
///
/// # Example
///
/// ```rust
/// use chatchunk::config::SplitMode;
///
/// assert_eq!("smartweek".parse::<SplitMode>().unwrap(), SplitMode::Week);
/// assert!("daily".parse::<SplitMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Evenly sized consecutive slices, titled `"0"`, `"1"`, ...
    #[default]
    Count,

    /// Calendar weeks folded together until a minimum size is reached,
    /// titled `"W3W4"` and so on.
    Week,
}

impl SplitMode {
    /// Returns all accepted mode names (including aliases).
    pub fn all_names() -> &'static [&'static str] {
        &["count", "msg_cnt", "msgcnt", "week", "smartweek"]
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::Count => write!(f, "count"),
            SplitMode::Week => write!(f, "week"),
        }
    }
}

impl FromStr for SplitMode {
    type Err = ChatchunkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "count" | "msg_cnt" | "msgcnt" => Ok(SplitMode::Count),
            "week" | "smartweek" => Ok(SplitMode::Week),
            _ => Err(ChatchunkError::invalid_configuration(format!(
                "unknown split mode '{}'. Expected one of: {}",
                s,
                SplitMode::all_names().join(", ")
            ))),
        }
    }
}

/// Configuration for the chunk partitioner.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `mode` | `Count` | Splitting strategy |
/// | `max_chunk_size` | 200 | Inputs this size or smaller stay in one chunk; count-mode upper bound |
/// | `min_chunk_size` | 10 | Week-mode buffer size that triggers an emit |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    /// Splitting strategy
    pub mode: SplitMode,

    /// Maximum chunk size (count mode), and the single-chunk cutoff for both modes
    pub max_chunk_size: usize,

    /// Minimum chunk size before a week-mode buffer is emitted
    pub min_chunk_size: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            mode: SplitMode::Count,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
        }
    }
}

impl ChunkConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the split mode.
    #[must_use]
    pub fn with_mode(mut self, mode: SplitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the maximum chunk size.
    #[must_use]
    pub fn with_max_chunk_size(mut self, size: usize) -> Self {
        self.max_chunk_size = size;
        self
    }

    /// Sets the minimum week-mode chunk size.
    #[must_use]
    pub fn with_min_chunk_size(mut self, size: usize) -> Self {
        self.min_chunk_size = size;
        self
    }

    /// Checks the configuration before any chunk is produced.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(ChatchunkError::invalid_configuration(
                "max_chunk_size must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Controls which metadata the text formatter renders.
///
/// Both parts are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Append `(forwarded from ...)` to forwarded messages
    pub include_forward_info: bool,

    /// Insert a quoted block for replies
    pub include_reply_quote: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_forward_info: true,
            include_reply_quote: true,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text only: no forward annotations, no reply quotes.
    pub fn bare() -> Self {
        Self {
            include_forward_info: false,
            include_reply_quote: false,
        }
    }

    #[must_use]
    pub fn with_forward_info(mut self, enabled: bool) -> Self {
        self.include_forward_info = enabled;
        self
    }

    #[must_use]
    pub fn with_reply_quote(mut self, enabled: bool) -> Self {
        self.include_reply_quote = enabled;
        self
    }
}
