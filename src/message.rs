//! Message type for archived forum-style chats.
//!
//! This module provides [`Message`], the immutable record the rest of the
//! crate works on. Messages arrive from the dump as 7-field records:
//!
//! ```text
//! [id, timestamp, text, author, forward_timestamp, forward_source, reply_to_id]
//! ```
//!
//! with timestamps as naive `"YYYY-MM-DD HH:MM:SS"` strings (no UTC offset).
//!
//! # Examples
//!
//! ## Builder Pattern
//!
//! ```
//! use chatchunk::Message;
//! use chatchunk::message::parse_timestamp;
//!
//! let ts = parse_timestamp("2024-01-15 10:30:00")?;
//! let msg = Message::new(101, ts, "Alice", "Agreed!")
//!     .with_reply_to(100);
//!
//! assert_eq!(msg.reply_to_id(), Some(100));
//! assert!(!msg.is_forwarded());
//! # Ok::<(), chatchunk::ChatchunkError>(())
//! ```
//!
//! ## From a dump record
//!
//! ```
//! use chatchunk::Message;
//! use serde_json::json;
//!
//! let record = json!([7, "2024-01-15 10:30:00", "Hi", "@alice (Alice)", null, null, null]);
//! let msg = Message::from_record(&record).unwrap();
//! assert_eq!(msg.id(), 7);
//! assert_eq!(msg.author(), "@alice (Alice)");
//! ```

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChatchunkError, Result};

/// Message identifier, unique across the whole chat (not just a topic).
pub type MessageId = i64;

/// Topic (forum sub-thread) identifier.
pub type TopicId = i64;

/// Number of fields in a dump record.
pub const RECORD_FIELDS: usize = 7;

/// Canonical timestamp layout used for display and serialization.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layouts accepted when reading timestamps from a dump. `%.f` makes the
/// fractional part optional.
const ACCEPTED_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// A single chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | [`MessageId`] | Globally unique message id |
/// | `timestamp` | `NaiveDateTime` | When the message was sent (no offset) |
/// | `text` | `String` | Message text, possibly a synthesized media caption |
/// | `author` | `String` | Display string of the sender |
/// | `forward_timestamp` | `Option<NaiveDateTime>` | Original date of a forwarded message |
/// | `forward_source` | `Option<String>` | Who the message was forwarded from |
/// | `reply_to_id` | `Option<MessageId>` | Message this one replies to (may be dangling) |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Globally unique message id.
    pub id: MessageId,

    /// When the message was sent.
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,

    /// Text content. Empty for media-only messages without a caption.
    #[serde(default)]
    pub text: String,

    /// Display string of the author, e.g. `@alice (Alice Smith)`.
    #[serde(default)]
    pub author: String,

    /// Original send date of a forwarded message.
    #[serde(with = "optional_timestamp_format")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub forward_timestamp: Option<NaiveDateTime>,

    /// Display string of the forward origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub forward_source: Option<String>,

    /// Id of the message this one replies to.
    ///
    /// Not guaranteed to resolve: the target may have been deleted or
    /// filtered out upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub reply_to_id: Option<MessageId>,
}

impl Message {
    /// Creates a plain message with no forward or reply metadata.
    pub fn new(
        id: MessageId,
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            text: text.into(),
            author: author.into(),
            forward_timestamp: None,
            forward_source: None,
            reply_to_id: None,
        }
    }

    /// Builds a message from one 7-field dump record.
    ///
    /// `text` and `author` may be `null` (read as empty strings); the three
    /// trailing fields may be `null`. Any other deviation is reported as a
    /// [`ChatchunkError::MalformedInput`] with an empty topic label; the
    /// repository fills in the topic and index.
    pub fn from_record(record: &Value) -> Result<Self> {
        Self::from_record_inner(record)
            .map_err(|reason| ChatchunkError::malformed_topic("", reason))
    }

    pub(crate) fn from_record_inner(record: &Value) -> std::result::Result<Self, String> {
        let fields = record
            .as_array()
            .ok_or_else(|| format!("expected a {RECORD_FIELDS}-field array, got {}", kind(record)))?;
        if fields.len() != RECORD_FIELDS {
            return Err(format!(
                "expected {RECORD_FIELDS} fields, got {}",
                fields.len()
            ));
        }

        let id = fields[0]
            .as_i64()
            .ok_or_else(|| format!("id must be an integer, got {}", kind(&fields[0])))?;
        let timestamp = required_timestamp(&fields[1], "timestamp")?;
        let text = optional_string(&fields[2], "text")?.unwrap_or_default();
        let author = optional_string(&fields[3], "author")?.unwrap_or_default();
        let forward_timestamp = match &fields[4] {
            Value::Null => None,
            value => Some(required_timestamp(value, "forward_timestamp")?),
        };
        let forward_source = optional_string(&fields[5], "forward_source")?;
        let reply_to_id = match &fields[6] {
            Value::Null => None,
            value => Some(value.as_i64().ok_or_else(|| {
                format!("reply_to_id must be an integer, got {}", kind(value))
            })?),
        };

        Ok(Self {
            id,
            timestamp,
            text,
            author,
            forward_timestamp,
            forward_source,
            reply_to_id,
        })
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Marks the message as forwarded from `source`, originally sent at `timestamp`.
    #[must_use]
    pub fn with_forward(
        mut self,
        source: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
    ) -> Self {
        self.forward_source = Some(source.into());
        self.forward_timestamp = timestamp;
        self
    }

    /// Sets the id of the message this one replies to.
    #[must_use]
    pub fn with_reply_to(mut self, reply_id: MessageId) -> Self {
        self.reply_to_id = Some(reply_id);
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn forward_timestamp(&self) -> Option<NaiveDateTime> {
        self.forward_timestamp
    }

    pub fn forward_source(&self) -> Option<&str> {
        self.forward_source.as_deref()
    }

    pub fn reply_to_id(&self) -> Option<MessageId> {
        self.reply_to_id
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if the message carries a forward origin.
    pub fn is_forwarded(&self) -> bool {
        self.forward_source.is_some()
    }

    /// ISO 8601 `(year, week)` of the message timestamp.
    ///
    /// The year is the ISO week-numbering year, which differs from the
    /// calendar year around New Year (2024-12-30 is week 1 of 2025).
    pub fn iso_week(&self) -> (i32, u32) {
        let week = self.timestamp.iso_week();
        (week.year(), week.week())
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`.
    pub fn timestamp_display(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

/// Parses a naive dump timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM:SS` with optional fractional seconds, and the
/// same with a `T` separator.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ChatchunkError::invalid_timestamp(input))
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn required_timestamp(value: &Value, field: &str) -> std::result::Result<NaiveDateTime, String> {
    let raw = value
        .as_str()
        .ok_or_else(|| format!("{field} must be a string, got {}", kind(value)))?;
    parse_timestamp(raw).map_err(|e| format!("{field}: {e}"))
}

fn optional_string(value: &Value, field: &str) -> std::result::Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(format!("{field} must be a string or null, got {}", kind(other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

pub(crate) mod optional_timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => serializer.serialize_some(&super::format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_timestamp(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}
