//! Chunk data model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// An ordered, titled batch of messages produced by [`partition`](super::partition).
///
/// The title depends on the split mode: empty for an unsplit input, the
/// zero-based ordinal in count mode (`"0"`, `"1"`, ...), or the folded week
/// numbers in week mode (`"W3W4"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub title: String,
    pub messages: Vec<Message>,
}

impl Chunk {
    pub fn new(messages: Vec<Message>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            messages,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Timestamp of the first message in chunk order.
    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.messages.first().map(Message::timestamp)
    }

    /// Timestamp of the last message in chunk order.
    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.messages.last().map(Message::timestamp)
    }
}
