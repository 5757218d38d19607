//! Unified error types for chatchunk.
//!
//! This module provides a single [`ChatchunkError`] enum that covers all error
//! cases in the library, in the same spirit as `serde_json::Error` or
//! `csv::Error`: one type to match on, with source chains where there is an
//! underlying cause.
//!
//! # What is (and isn't) an error
//!
//! - A dump record that doesn't have the 7-field shape is [`MalformedInput`](ChatchunkError::MalformedInput).
//! - An unknown split mode or a zero chunk size is [`InvalidConfiguration`](ChatchunkError::InvalidConfiguration).
//! - A reply pointing at a message that was never loaded is **not** an error;
//!   the formatter renders a placeholder quote instead.
//! - Asking for a topic that was never loaded is **not** an error either;
//!   it is skipped when gathering messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatchunk operations.
///
/// # Example
///
/// ```rust
/// use chatchunk::error::Result;
/// use chatchunk::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatchunkError>;

/// The error type for all chatchunk operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatchunkError {
    /// An I/O error occurred while reading a dump or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The dump file is not valid JSON (or not the expected top-level shape).
    #[error("Failed to parse {format}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g. "chat dump JSON")
        format: &'static str,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A message record or topic entry doesn't match the expected shape.
    ///
    /// The repository is not constructed when this is returned.
    #[error("Malformed input in topic {topic}{}: {reason}", index.map(|i| format!(", record #{i}")).unwrap_or_default())]
    MalformedInput {
        /// Topic key as it appeared in the dump
        topic: String,
        /// Position of the offending record within the topic, if applicable
        index: Option<usize>,
        /// What was wrong with it
        reason: String,
    },

    /// Partitioning was requested with an unusable configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the problem
        message: String,
    },

    /// A timestamp string could not be parsed.
    #[error("Invalid timestamp '{input}'. Expected format: {expected}")]
    InvalidTimestamp {
        /// The string that failed to parse
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// JSON serialization error (output writers).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error while reading a topic-name file.
    #[cfg(feature = "yaml")]
    #[error("YAML error{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Yaml {
        /// The underlying YAML error
        #[source]
        source: serde_yaml::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatchunkError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatchunkError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatchunkError {
    /// Creates a parse error for a chat dump.
    pub fn dump_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatchunkError::Parse {
            format: "chat dump JSON",
            source,
            path,
        }
    }

    /// Creates a malformed-input error for a whole topic entry.
    pub fn malformed_topic(topic: impl Into<String>, reason: impl Into<String>) -> Self {
        ChatchunkError::MalformedInput {
            topic: topic.into(),
            index: None,
            reason: reason.into(),
        }
    }

    /// Creates a malformed-input error for a single record inside a topic.
    pub fn malformed_record(
        topic: impl Into<String>,
        index: usize,
        reason: impl Into<String>,
    ) -> Self {
        ChatchunkError::MalformedInput {
            topic: topic.into(),
            index: Some(index),
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ChatchunkError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        ChatchunkError::InvalidTimestamp {
            input: input.into(),
            expected: "YYYY-MM-DD HH:MM:SS",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatchunkError::Io(_))
    }

    /// Returns `true` if this is a dump parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatchunkError::Parse { .. })
    }

    /// Returns `true` if this is a malformed input error.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ChatchunkError::MalformedInput { .. })
    }

    /// Returns `true` if this is an invalid configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, ChatchunkError::InvalidConfiguration { .. })
    }

    /// Returns `true` if this is a timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatchunkError::InvalidTimestamp { .. })
    }
}
