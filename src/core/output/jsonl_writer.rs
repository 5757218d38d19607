//! JSON Lines (JSONL) output writer.
//!
//! One chunk per line, which suits pipelines that summarize chunk by chunk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ChunkRecord;
use crate::core::models::Chunk;
use crate::error::Result;

/// Writes chunks to JSONL, one compact JSON object per line.
pub fn write_jsonl(chunks: &[Chunk], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for (i, chunk) in chunks.iter().enumerate() {
        let line = serde_json::to_string(&ChunkRecord::new(i, chunk))?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Same format as [`write_jsonl`], returned as a string.
pub fn to_jsonl(chunks: &[Chunk]) -> Result<String> {
    let mut output = String::new();

    for (i, chunk) in chunks.iter().enumerate() {
        output.push_str(&serde_json::to_string(&ChunkRecord::new(i, chunk))?);
        output.push('\n');
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Message, parse_timestamp};
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    fn chunks() -> Vec<Chunk> {
        let ts = parse_timestamp("2024-06-15 12:30:00").unwrap();
        vec![
            Chunk::new(
                vec![Message::new(1, ts, "Alice", "Hello\nsecond line")],
                "0",
            ),
            Chunk::new(vec![Message::new(2, ts, "Bob", "Hi")], "1"),
        ]
    }

    #[test]
    fn test_write_jsonl() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&chunks(), temp_file.path()).unwrap();

        let reader = BufReader::new(std::fs::File::open(temp_file.path()).unwrap());
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["title"], "0");
        assert_eq!(first["messages"][0]["text"], "Hello\nsecond line");
    }

    #[test]
    fn test_to_jsonl_matches_file_output() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&chunks(), temp_file.path()).unwrap();

        let from_file = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(to_jsonl(&chunks()).unwrap(), from_file);
    }

    #[test]
    fn test_jsonl_no_array_brackets() {
        let content = to_jsonl(&chunks()).unwrap();
        assert!(!content.starts_with('['));
        assert_eq!(content.lines().count(), 2);
    }
}
