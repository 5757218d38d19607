//! Topic name files.
//!
//! A YAML mapping from topic id to a human-friendly name, used to override
//! the titles that came with the dump:
//!
//! ```yaml
//! 1: General
//! 42: Release planning
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{ChatchunkError, Result};
use crate::message::TopicId;

/// Parses a topic-name mapping from a YAML string.
pub fn parse_topic_names(content: &str) -> Result<BTreeMap<TopicId, String>> {
    serde_yaml::from_str(content).map_err(|source| ChatchunkError::Yaml { source, path: None })
}

/// Reads a topic-name mapping from a YAML file.
pub fn read_topic_names(path: impl AsRef<Path>) -> Result<BTreeMap<TopicId, String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|source| ChatchunkError::Yaml {
        source,
        path: Some(path.to_path_buf()),
    })
}
