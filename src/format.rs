//! Output format selection.
//!
//! # Example
//!
//! ```rust
//! # fn example() -> chatchunk::Result<()> {
//! use chatchunk::config::FormatOptions;
//! use chatchunk::core::{Chunk, Formatter, Repository};
//! use chatchunk::format::{OutputFormat, to_format_string};
//!
//! let repo = Repository::default();
//! let chunks: Vec<Chunk> = Vec::new();
//!
//! let format = OutputFormat::from_path("chunks.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let out = to_format_string(&chunks, format, &Formatter::new(&repo), &FormatOptions::default())?;
//! assert!(out.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::FormatOptions;
use crate::core::models::Chunk;
use crate::core::render::Formatter;
use crate::error::{ChatchunkError, Result};

/// Output format for chunks.
///
/// - [`Text`](OutputFormat::Text) - rendered chat text, ready to paste into a prompt
/// - [`Json`](OutputFormat::Json) - structured array of chunks
/// - [`Jsonl`](OutputFormat::Jsonl) - one chunk per line, for pipelines
/// - [`Csv`](OutputFormat::Csv) - one row per message, semicolon-delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Rendered text with reply quotes (default)
    #[default]
    Text,

    /// JSON array of chunks
    Json,

    /// JSON Lines - one chunk per line
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "jsonl", "ndjson", "csv"]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse().map_err(|_| {
            ChatchunkError::invalid_configuration(format!(
                "unknown output file extension '.{}'. Expected one of: {}",
                ext,
                OutputFormat::all_names().join(", ")
            ))
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ChatchunkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatchunkError::invalid_configuration(format!(
                "unknown output format '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            ))),
        }
    }
}

/// Writes chunks to a file in the specified format.
///
/// `formatter` and `options` are only used by [`OutputFormat::Text`].
#[allow(unused_variables)]
pub fn write_to_format(
    chunks: &[Chunk],
    path: impl AsRef<Path>,
    format: OutputFormat,
    formatter: &Formatter<'_>,
    options: &FormatOptions,
) -> Result<()> {
    use crate::core::output;

    match format {
        OutputFormat::Text => output::write_text(chunks, path, formatter, options),
        OutputFormat::Json => output::write_json(chunks, path),
        OutputFormat::Jsonl => output::write_jsonl(chunks, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => output::write_csv(chunks, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts chunks to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    chunks: &[Chunk],
    format: OutputFormat,
    formatter: &Formatter<'_>,
    options: &FormatOptions,
) -> Result<String> {
    use crate::core::output;

    match format {
        OutputFormat::Text => Ok(output::to_text(chunks, formatter, options)),
        OutputFormat::Json => output::to_json(chunks),
        OutputFormat::Jsonl => output::to_jsonl(chunks),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => output::to_csv(chunks),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatchunkError {
    ChatchunkError::invalid_configuration(format!(
        "output format {} requires the 'csv-output' feature to be enabled",
        format
    ))
}
