//! Chat dump JSON structure.
//!
//! A dump looks like this:
//!
//! ```json
//! {
//!   "topics": [[1, "General"], [42, "Announcements"]],
//!   "messages": {
//!     "1":  [[100, "2024-01-15 10:30:00", "Hello", "@alice (Alice)", null, null, null]],
//!     "42": [[101, "2024-01-15 10:31:00", "Hi", "Bob", null, null, 100]]
//!   }
//! }
//! ```
//!
//! Message records are kept as raw [`Value`]s here so that a bad record is
//! reported with its topic and position instead of as a generic serde error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChatchunkError, Result};
use crate::message::TopicId;

/// An already-parsed, not yet validated chat dump.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawExport {
    /// `(topic id, title)` pairs as listed by the forum.
    #[serde(default)]
    pub topics: Vec<(TopicId, String)>,

    /// Topic id (as a JSON object key) to its list of message records.
    pub messages: BTreeMap<String, Value>,
}

impl RawExport {
    /// Parses a dump from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ChatchunkError::dump_parse(e, None))
    }

    /// Reads and parses a dump file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ChatchunkError::dump_parse(e, Some(path.to_path_buf())))
    }

    /// Adds a topic's records (builder style, mostly for tests and tooling).
    #[must_use]
    pub fn with_topic(mut self, topic: TopicId, records: Vec<Value>) -> Self {
        self.messages.insert(topic.to_string(), Value::Array(records));
        self
    }

    /// Adds a topic title.
    #[must_use]
    pub fn with_topic_title(mut self, topic: TopicId, title: impl Into<String>) -> Self {
        self.topics.push((topic, title.into()));
        self
    }

    /// Total number of records across all topics, counting only array entries.
    pub fn record_count(&self) -> usize {
        self.messages
            .values()
            .filter_map(Value::as_array)
            .map(Vec::len)
            .sum()
    }
}
