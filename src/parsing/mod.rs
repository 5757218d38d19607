//! Reading chat dumps and side files from disk.
//!
//! The dump is produced by an external grabber; this module only turns the
//! bytes into [`RawExport`], whose records are validated later by
//! [`Repository::load`](crate::core::Repository::load).

pub mod dump;

#[cfg(feature = "yaml")]
pub mod topics;

pub use dump::RawExport;

#[cfg(feature = "yaml")]
pub use topics::{parse_topic_names, read_topic_names};
