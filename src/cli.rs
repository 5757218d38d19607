//! Command-line interface definition using clap.
//!
//! [`Args`] only collects raw values. An unknown split mode or a zero chunk
//! size is rejected by the library types built from it, so the CLI reports
//! the same [`ChatchunkError`](crate::ChatchunkError) the library would.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{ChunkConfig, FormatOptions, SplitMode};
use crate::error::Result;
use crate::format::OutputFormat;
use crate::message::TopicId;

/// Default output file stem when `--output` is not given.
pub const DEFAULT_OUTPUT_STEM: &str = "chunks";

/// Split archived group-chat dumps into titled chunks ready for LLM summarization.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatchunk")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatchunk dump.json
    chatchunk dump.json -m week --min-chunk-size 20
    chatchunk dump.json -t 1,42 -o general.txt
    chatchunk dump.json -f jsonl -o chunks.jsonl --no-forward
    chatchunk dump.json --topic-names topics.yaml -v")]
pub struct Args {
    /// Path to the JSON dump
    pub input: PathBuf,

    /// Only include these topic ids, in this order (default: all topics)
    #[arg(short, long, value_delimiter = ',', value_name = "IDS")]
    pub topics: Vec<TopicId>,

    /// Split mode: count or week
    #[arg(short, long, default_value = "count", value_name = "MODE")]
    pub mode: String,

    /// Input size below which no splitting happens; chunk size cap in count mode
    #[arg(long, default_value_t = crate::config::DEFAULT_MAX_CHUNK_SIZE, value_name = "N")]
    pub max_chunk_size: usize,

    /// Minimum messages before a week chunk is emitted
    #[arg(long, default_value_t = crate::config::DEFAULT_MIN_CHUNK_SIZE, value_name = "N")]
    pub min_chunk_size: usize,

    /// Path to output file (default: chunks.<ext>)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the output extension, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit "(forwarded from ...)" annotations
    #[arg(long)]
    pub no_forward: bool,

    /// Omit quoted reply targets
    #[arg(long)]
    pub no_reply: bool,

    /// YAML file mapping topic ids to names
    #[arg(long, value_name = "FILE")]
    pub topic_names: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Partitioner settings from the flags.
    pub fn chunk_config(&self) -> Result<ChunkConfig> {
        let config = ChunkConfig::new()
            .with_mode(self.mode.parse::<SplitMode>()?)
            .with_max_chunk_size(self.max_chunk_size)
            .with_min_chunk_size(self.min_chunk_size);
        config.validate()?;
        Ok(config)
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new()
            .with_forward_info(!self.no_forward)
            .with_reply_quote(!self.no_reply)
    }

    /// Explicit `--format`, else the output extension, else text.
    pub fn output_format(&self) -> Result<OutputFormat> {
        match (self.format, &self.output) {
            (Some(format), _) => Ok(format),
            (None, Some(path)) if path.extension().is_some() => OutputFormat::from_path(path),
            (None, _) => Ok(OutputFormat::Text),
        }
    }

    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            Path::new(DEFAULT_OUTPUT_STEM).with_extension(format.extension())
        })
    }
}
