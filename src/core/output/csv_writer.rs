//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::Chunk;
use crate::error::Result;
use crate::message::Message;

const HEADER: [&str; 6] = ["Chunk", "Id", "Timestamp", "Author", "Text", "ReplyTo"];

/// Writes chunks to CSV, one row per message.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Chunk`, `Id`, `Timestamp`, `Author`, `Text`, `ReplyTo`
/// - `Chunk` is the chunk title, or its ordinal when the title is empty
/// - Encoding: UTF-8
pub fn write_csv(chunks: &[Chunk], output_path: impl AsRef<Path>) -> Result<()> {
    let csv = to_csv(chunks)?;
    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Same format as [`write_csv`], returned as a string.
pub fn to_csv(chunks: &[Chunk]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    for (i, chunk) in chunks.iter().enumerate() {
        let label = if chunk.title.is_empty() {
            i.to_string()
        } else {
            chunk.title.clone()
        };
        for msg in &chunk.messages {
            writer.write_record(build_record(&label, msg))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn build_record(label: &str, msg: &Message) -> [String; 6] {
    [
        label.to_string(),
        msg.id.to_string(),
        msg.timestamp_display(),
        msg.author.clone(),
        msg.text.clone(),
        msg.reply_to_id.map(|id| id.to_string()).unwrap_or_default(),
    ]
}
