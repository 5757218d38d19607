//! Plain-text output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::FormatOptions;
use crate::core::models::Chunk;
use crate::core::render::Formatter;
use crate::error::Result;

/// Heading line placed above each chunk, e.g. `=== Chunk 2/3: W5W6 ===`.
pub fn chunk_heading(index: usize, total: usize, title: &str) -> String {
    if title.is_empty() {
        format!("=== Chunk {}/{} ===", index + 1, total)
    } else {
        format!("=== Chunk {}/{}: {} ===", index + 1, total, title)
    }
}

/// Renders every chunk under its heading, chunks separated by a blank line.
pub fn to_text(chunks: &[Chunk], formatter: &Formatter<'_>, options: &FormatOptions) -> String {
    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            format!(
                "{}\n{}",
                chunk_heading(i, chunks.len(), &chunk.title),
                formatter.format_chunk(chunk, options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes [`to_text`] output to a file.
pub fn write_text(
    chunks: &[Chunk],
    output_path: impl AsRef<Path>,
    formatter: &Formatter<'_>,
    options: &FormatOptions,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_text(chunks, formatter, options).as_bytes())?;
    writer.flush()?;
    Ok(())
}
