//! Telegram JSON export ingestion.
//!
//! Telegram Desktop exports chats as JSON with the following structure:
//!
//! ```json
//! {
//!   "name": "Chat Name",
//!   "type": "personal_chat",
//!   "id": 123456789,
//!   "messages": [
//!     {
//!       "id": 12345,
//!       "type": "message",
//!       "date": "2024-01-15T10:30:00",
//!       "date_unixtime": "1705314600",
//!       "from": "Sender Name",
//!       "photo": "photos/photo_1.jpg",
//!       "text_entities": [
//!         {"type": "plain", "text": "Check "},
//!         {"type": "link", "text": "https://example.com"}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! This module is the validation boundary: malformed exports are rejected
//! here with a descriptive [`ChatscopeError`], so the pipeline downstream
//! may assume well-formed input and never fails.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatscope::ingest;
//!
//! # fn main() -> chatscope::Result<()> {
//! let export = ingest::parse_file("result.json".as_ref())?;
//! println!("{} messages", export.messages.len());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use chrono::DateTime;
use serde::Deserialize;

use crate::error::{ChatscopeError, Result};
use crate::message::{Message, TextEntity};

/// A parsed Telegram chat export.
#[derive(Debug, Clone)]
pub struct ChatExport {
    /// Chat display name, when the export carries one.
    pub name: Option<String>,

    /// All messages in export (insertion) order.
    pub messages: Vec<Message>,
}

// Internal structures for deserializing Telegram JSON.
// Fields are optional here so that missing ones surface as descriptive
// InvalidFormat errors instead of opaque serde messages.

#[derive(Debug, Deserialize)]
struct RawExport {
    name: Option<String>,
    messages: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    id: Option<u64>,
    date_unixtime: Option<String>,
    from: Option<String>,
    photo: Option<String>,
    text_entities: Option<Vec<TextEntity>>,
}

/// Parses a Telegram JSON export file.
///
/// # Errors
///
/// - [`ChatscopeError::Io`] when the file cannot be read
/// - [`ChatscopeError::Parse`] when the content is not valid JSON or the
///   top-level `messages` array is missing
/// - [`ChatscopeError::InvalidFormat`] when a message record is missing a
///   required field or carries an unparseable timestamp
pub fn parse_file(path: &Path) -> Result<ChatExport> {
    let content = fs::read_to_string(path)?;
    parse_content(&content, Some(path))
}

/// Parses a Telegram JSON export from a string.
///
/// Same validation as [`parse_file`], without the file context.
pub fn parse_str(content: &str) -> Result<ChatExport> {
    parse_content(content, None)
}

fn parse_content(content: &str, path: Option<&Path>) -> Result<ChatExport> {
    let raw: RawExport = serde_json::from_str(content)
        .map_err(|e| ChatscopeError::parse(e, path.map(Path::to_path_buf)))?;

    let messages = raw
        .messages
        .into_iter()
        .enumerate()
        .map(|(index, msg)| convert_message(index, msg))
        .collect::<Result<Vec<_>>>()?;

    Ok(ChatExport {
        name: raw.name,
        messages,
    })
}

/// Converts one raw record, rejecting records that violate the export
/// contract (`id`, `date_unixtime` and `text_entities` are required).
fn convert_message(index: usize, raw: RawMessage) -> Result<Message> {
    let id = raw
        .id
        .ok_or_else(|| ChatscopeError::invalid_format(format!("message #{index} is missing 'id'")))?;

    let unixtime = raw.date_unixtime.ok_or_else(|| {
        ChatscopeError::invalid_format(format!("message {id} is missing 'date_unixtime'"))
    })?;

    // Telegram stores the timestamp as string-wrapped Unix seconds.
    let secs: i64 = unixtime.parse().map_err(|_| {
        ChatscopeError::invalid_format(format!(
            "message {id} has a non-numeric 'date_unixtime': '{unixtime}'"
        ))
    })?;
    let timestamp = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        ChatscopeError::invalid_format(format!(
            "message {id} has an out-of-range 'date_unixtime': '{unixtime}'"
        ))
    })?;

    let text_entities = raw.text_entities.ok_or_else(|| {
        ChatscopeError::invalid_format(format!("message {id} is missing 'text_entities'"))
    })?;

    Ok(Message {
        id,
        timestamp,
        from: raw.from,
        photo: raw.photo,
        text_entities,
    })
}
