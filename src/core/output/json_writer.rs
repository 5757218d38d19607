//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::ChunkRecord;
use crate::core::models::Chunk;
use crate::error::Result;

/// Writes chunks to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {
///     "index": 0,
///     "title": "W1W2",
///     "message_count": 2,
///     "messages": [
///       {"id": 1, "timestamp": "2024-01-01 09:00:00", "text": "Hello", "author": "Alice"},
///       {"id": 2, "timestamp": "2024-01-08 09:00:00", "text": "Hi", "author": "Bob", "reply_to_id": 1}
///     ]
///   }
/// ]
/// ```
pub fn write_json(chunks: &[Chunk], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(chunks)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Same format as [`write_json`], returned as a string.
pub fn to_json(chunks: &[Chunk]) -> Result<String> {
    let records: Vec<ChunkRecord<'_>> = chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| ChunkRecord::new(i, chunk))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
