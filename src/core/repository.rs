//! Loaded chat corpus with an id index.
//!
//! A [`Repository`] is built once from a [`RawExport`] and is read-only
//! afterwards. It replaces "global topics + linear scan" with an explicit
//! object that every consumer borrows, and an id index that makes reply
//! resolution O(1).
//!
//! # Example
//!
//! ```rust
//! use chatchunk::core::Repository;
//! use chatchunk::parsing::RawExport;
//!
//! let raw = RawExport::from_str(r#"{
//!     "messages": {
//!         "1": [[10, "2024-01-15 10:30:00", "Hello", "Alice", null, null, null]],
//!         "2": [[11, "2024-01-15 10:31:00", "Hi", "Bob", null, null, 10]]
//!     }
//! }"#)?;
//!
//! let repo = Repository::load(raw)?;
//! assert_eq!(repo.len(), 2);
//! assert_eq!(repo.lookup_by_id(10).map(|m| m.author()), Some("Alice"));
//! assert!(repo.lookup_by_id(999).is_none());
//!
//! // Only topic 2, then topic 1
//! let messages = repo.gather(&[2, 1]);
//! assert_eq!(messages[0].id(), 11);
//! # Ok::<(), chatchunk::ChatchunkError>(())
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ChatchunkError, Result};
use crate::message::{Message, MessageId, TopicId};
use crate::parsing::RawExport;

/// A forum topic and its chronologically ordered messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub id: TopicId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub messages: Vec<Message>,
}

impl Topic {
    pub fn new(id: TopicId, messages: Vec<Message>) -> Self {
        Self {
            id,
            title: None,
            messages,
        }
    }
}

/// Read-only store of every loaded topic plus an id → message index.
///
/// Topics are iterated in ascending id order. Messages inside a topic keep
/// the order the dump gave them.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    topics: Vec<Topic>,
    positions: HashMap<TopicId, usize>,
    index: HashMap<MessageId, (usize, usize)>,
}

impl Repository {
    /// Validates a raw dump and builds the repository.
    ///
    /// Fails with [`ChatchunkError::MalformedInput`] if a topic key is not an
    /// integer, a topic value is not a list of records, a record does not have
    /// the 7-field shape, or a message id appears twice anywhere in the dump.
    pub fn load(raw: RawExport) -> Result<Self> {
        let mut topics = Vec::with_capacity(raw.messages.len());

        for (key, value) in &raw.messages {
            let id: TopicId = key
                .trim()
                .parse()
                .map_err(|_| ChatchunkError::malformed_topic(key, "topic id is not an integer"))?;
            let records = value.as_array().ok_or_else(|| {
                ChatchunkError::malformed_topic(key, "expected a list of message records")
            })?;
            topics.push((key.as_str(), Topic::new(id, parse_records(key, records)?)));
        }

        // Keys compare as strings in the dump; topics are served by numeric id.
        topics.sort_by_key(|(_, topic)| topic.id);

        let mut repo = Self::default();
        for (key, topic) in topics {
            repo.insert(key, topic)?;
        }
        repo = repo.with_topic_names(raw.topics);

        tracing::info!(
            topics = repo.topic_count(),
            messages = repo.len(),
            "loaded chat dump"
        );
        Ok(repo)
    }

    /// Reads, parses and loads a dump file in one step.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(RawExport::from_path(path)?)
    }

    /// Builds a repository from already-constructed topics.
    ///
    /// Applies the same id-uniqueness rule as [`load`](Self::load).
    pub fn from_topics(topics: impl IntoIterator<Item = Topic>) -> Result<Self> {
        let mut topics: Vec<Topic> = topics.into_iter().collect();
        topics.sort_by_key(|topic| topic.id);

        let mut repo = Self::default();
        for topic in topics {
            let key = topic.id.to_string();
            repo.insert(&key, topic)?;
        }
        Ok(repo)
    }

    /// Overrides topic titles. Names for topics that were never loaded are ignored.
    #[must_use]
    pub fn with_topic_names(
        mut self,
        names: impl IntoIterator<Item = (TopicId, String)>,
    ) -> Self {
        for (id, name) in names {
            if let Some(&pos) = self.positions.get(&id) {
                self.topics[pos].title = Some(name);
            }
        }
        self
    }

    fn insert(&mut self, key: &str, topic: Topic) -> Result<()> {
        if self.positions.contains_key(&topic.id) {
            return Err(ChatchunkError::malformed_topic(
                key,
                format!("topic {} appears more than once", topic.id),
            ));
        }

        let topic_pos = self.topics.len();
        for (msg_pos, msg) in topic.messages.iter().enumerate() {
            if let Some(&(other, _)) = self.index.get(&msg.id) {
                // `other == topic_pos` means the duplicate is inside this topic
                let owner = self.topics.get(other).map_or(topic.id, |t| t.id);
                return Err(ChatchunkError::malformed_record(
                    key,
                    msg_pos,
                    format!(
                        "duplicate message id {} (already in topic {})",
                        msg.id, owner
                    ),
                ));
            }
            self.index.insert(msg.id, (topic_pos, msg_pos));
        }

        tracing::debug!(topic = topic.id, messages = topic.messages.len(), "indexed topic");
        self.positions.insert(topic.id, topic_pos);
        self.topics.push(topic);
        Ok(())
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Returns the message with this id, or `None` if it was never loaded.
    ///
    /// `None` is the expected answer for a dangling reply reference.
    pub fn lookup_by_id(&self, id: MessageId) -> Option<&Message> {
        self.index
            .get(&id)
            .map(|&(topic, msg)| &self.topics[topic].messages[msg])
    }

    /// Concatenates topic message streams.
    ///
    /// With an empty `topic_ids`, every topic is included in ascending id
    /// order. Otherwise exactly the named topics are included, in the order
    /// given; ids that were never loaded are skipped.
    pub fn gather(&self, topic_ids: &[TopicId]) -> Vec<Message> {
        if topic_ids.is_empty() {
            return self
                .topics
                .iter()
                .flat_map(|topic| topic.messages.iter().cloned())
                .collect();
        }

        topic_ids
            .iter()
            .filter_map(|id| self.topic(*id))
            .flat_map(|topic| topic.messages.iter().cloned())
            .collect()
    }

    /// Returns a topic by id.
    pub fn topic(&self, id: TopicId) -> Option<&Topic> {
        self.positions.get(&id).map(|&pos| &self.topics[pos])
    }

    /// Returns the title of a topic, if one is known.
    pub fn topic_title(&self, id: TopicId) -> Option<&str> {
        self.topic(id).and_then(|topic| topic.title.as_deref())
    }

    /// All topics in iteration order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Topic ids in iteration order.
    pub fn topic_ids(&self) -> Vec<TopicId> {
        self.topics.iter().map(|topic| topic.id).collect()
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Total number of messages across all topics.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn parse_records(key: &str, records: &[Value]) -> Result<Vec<Message>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            Message::from_record_inner(record)
                .map_err(|reason| ChatchunkError::malformed_record(key, i, reason))
        })
        .collect()
}
