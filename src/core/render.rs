//! Human-readable rendering of messages with reply quotes.
//!
//! A rendered message looks like this:
//!
//! ```text
//! [2024-01-15 10:31:00 from Bob] (forwarded from News 2024-01-14 08:00:00)
//! > [2024-01-15 10:30:00 from Alice]
//! > Original line one
//! > Original line two
//! Reply text
//! ```
//!
//! The quoted block is looked up through the [`Repository`]; a reply to a
//! message that isn't loaded gets [`MISSING_QUOTE`] instead.

use crate::config::FormatOptions;
use crate::message::{Message, format_timestamp};

use super::models::Chunk;
use super::repository::Repository;

/// Quote line used when a reply points at a message that isn't loaded.
pub const MISSING_QUOTE: &str = "> [quoted message not found]";

/// First line of [`Formatter::format_all`] output.
pub const BODY_HEADER: &str = "Chat contents:\n";

/// Placed between messages in [`Formatter::format_all`] output.
pub const MESSAGE_SEPARATOR: &str = "****\n\n";

/// Renders messages to text, resolving replies through a [`Repository`].
///
/// The formatter only reads from the repository, so it can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    repo: &'a Repository,
}

impl<'a> Formatter<'a> {
    pub fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }

    /// Renders one message: header line, optional forward annotation,
    /// optional reply quote, then the text.
    pub fn format_message(&self, msg: &Message, options: &FormatOptions) -> String {
        let mut out = format!("[{} from {}]", msg.timestamp_display(), msg.author);

        if options.include_forward_info {
            if let Some(source) = msg.forward_source() {
                out.push_str(" (forwarded from ");
                out.push_str(source);
                if let Some(ts) = msg.forward_timestamp() {
                    out.push(' ');
                    out.push_str(&format_timestamp(&ts));
                }
                out.push(')');
            }
        }
        out.push('\n');

        if options.include_reply_quote {
            if let Some(reply_id) = msg.reply_to_id() {
                match self.repo.lookup_by_id(reply_id) {
                    Some(replied) => out.push_str(&quote(replied)),
                    None => {
                        tracing::debug!(message = msg.id, reply_to = reply_id, "dangling reply");
                        out.push_str(MISSING_QUOTE);
                        out.push('\n');
                    }
                }
            }
        }

        out.push_str(&msg.text);
        out.push('\n');
        out
    }

    /// Renders a sequence of messages under [`BODY_HEADER`], separated by
    /// [`MESSAGE_SEPARATOR`].
    pub fn format_all(&self, messages: &[Message], options: &FormatOptions) -> String {
        let body = messages
            .iter()
            .map(|msg| self.format_message(msg, options))
            .collect::<Vec<_>>()
            .join(MESSAGE_SEPARATOR);
        format!("{BODY_HEADER}{body}")
    }

    /// Renders the messages of one chunk, same as [`format_all`](Self::format_all).
    pub fn format_chunk(&self, chunk: &Chunk, options: &FormatOptions) -> String {
        self.format_all(&chunk.messages, options)
    }
}

/// Quoted block for a resolved reply target.
fn quote(replied: &Message) -> String {
    let mut out = format!("> [{} from {}]\n", replied.timestamp_display(), replied.author);
    let lines = split_lines(&replied.text);
    if lines.is_empty() {
        out.push_str("> \n");
    }
    for line in lines {
        out.push_str("> ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every Unicode line boundary, `\r\n` counting as one.
/// A trailing break does not start an empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
