//! Message type for Telegram chat exports.
//!
//! This module provides [`Message`], the normalized representation of one
//! exported chat message, [`TextEntity`], the formatted-text spans Telegram
//! attaches to it, and [`Classification`], the PR/Direct split the whole
//! pipeline is built around.
//!
//! # Overview
//!
//! A message consists of:
//! - **Required**: `id`, `timestamp`, `text_entities`
//! - **Optional**: `from` (sender), `photo`
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use chatscope::{Classification, Message, TextEntity};
//! use chrono::{TimeZone, Utc};
//!
//! let msg = Message::new(1, Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
//!     .with_from("Alice")
//!     .with_entity(TextEntity::new("plain", "Merged the fix: "))
//!     .with_entity(TextEntity::new("link", "https://example.com/pull/42"));
//!
//! assert_eq!(msg.classification(), Classification::Pr);
//! assert_eq!(msg.full_text(), "Merged the fix: https://example.com/pull/42");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity kinds that mark a message as link-bearing.
const LINK_KINDS: [&str; 2] = ["link", "text_link"];

/// One formatted-text span of a Telegram message.
///
/// Telegram splits message text into typed spans (`plain`, `bold`, `link`,
/// `text_link`, ...). The kind is a free-form string; only the link kinds are
/// significant to classification, everything else is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntity {
    /// Span kind, e.g. `"plain"`, `"link"`, `"text_link"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Literal text content of the span.
    pub text: String,
}

impl TextEntity {
    /// Creates a new entity span.
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }

    /// Returns `true` if this span is a hyperlink (`link` or `text_link`).
    pub fn is_link(&self) -> bool {
        LINK_KINDS.contains(&self.kind.as_str())
    }
}

/// The PR/Direct split of a message.
///
/// A message is [`Pr`](Classification::Pr) iff at least one of its entity
/// spans is a hyperlink kind; otherwise it is [`Direct`](Classification::Direct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Link-bearing message (contains a `link` or `text_link` entity).
    Pr,
    /// Plain message with no hyperlink entity.
    Direct,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Pr => write!(f, "PR"),
            Classification::Direct => write!(f, "Direct"),
        }
    }
}

/// One message from a Telegram chat export.
///
/// Messages are immutable after ingestion; their order in the parsed
/// collection is the insertion order of the export and is preserved by
/// every pipeline stage.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `u64` | Message identifier from the export |
/// | `timestamp` | `DateTime<Utc>` | When the message was sent |
/// | `from` | `Option<String>` | Sender display name |
/// | `photo` | `Option<String>` | Attached photo path, if any |
/// | `text_entities` | `Vec<TextEntity>` | Ordered formatted-text spans |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier from the export.
    pub id: u64,

    /// When the message was originally sent.
    ///
    /// Telegram encodes this as string-wrapped Unix seconds; the ingestion
    /// boundary parses it before the core ever sees the message.
    pub timestamp: DateTime<Utc>,

    /// Sender display name, when the export carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub from: Option<String>,

    /// Relative path of an attached photo, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub photo: Option<String>,

    /// Ordered formatted-text spans. May be empty.
    #[serde(default)]
    pub text_entities: Vec<TextEntity>,
}

impl Message {
    /// Creates a new message with no sender, photo or entities.
    pub fn new(id: u64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            timestamp,
            from: None,
            photo: None,
            text_entities: Vec::new(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Builder method to set the sender name.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Builder method to set the attached photo path.
    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Builder method to append one entity span.
    #[must_use]
    pub fn with_entity(mut self, entity: TextEntity) -> Self {
        self.text_entities.push(entity);
        self
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Classifies this message as PR or Direct.
    ///
    /// PR iff any entity span's kind is `link` or `text_link`. Pure and
    /// total; an entity-less message is Direct.
    ///
    /// # Example
    ///
    /// ```
    /// use chatscope::{Classification, Message, TextEntity};
    /// use chrono::Utc;
    ///
    /// let msg = Message::new(1, Utc::now())
    ///     .with_entity(TextEntity::new("plain", "no links here"));
    /// assert_eq!(msg.classification(), Classification::Direct);
    /// ```
    pub fn classification(&self) -> Classification {
        if self.text_entities.iter().any(TextEntity::is_link) {
            Classification::Pr
        } else {
            Classification::Direct
        }
    }

    /// Reconstructs the full display text: all entity texts, in order.
    pub fn full_text(&self) -> String {
        self.text_entities
            .iter()
            .map(|entity| entity.text.as_str())
            .collect()
    }

    /// Returns `true` if the message carries a photo attachment.
    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}
