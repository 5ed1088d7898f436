//! Normalized message and reaction types.
//!
//! This module provides [`Message`], the normalized representation of one
//! chat entry extracted from an export document, and [`Reaction`], the emoji
//! annotations attached to it. The extractor produces these once per
//! document pass; they are immutable afterward.
//!
//! # Overview
//!
//! A message consists of:
//! - **Required**: `sender` (falls back to `"Unknown"`) and `text` (empty
//!   string when absent, never null)
//! - **Optional**: `timestamp` and `sticker`
//! - `reactions`, in document order (empty when the message has none)
//!
//! # Examples
//!
//! ```
//! use chatstat::{Message, Reaction};
//!
//! let msg = Message::new("Alice", "Hello, world!")
//!     .with_reaction(Reaction::new(Some("👍"), vec!["Bob".into()]));
//!
//! assert_eq!(msg.sender, "Alice");
//! assert_eq!(msg.message_length(), 13);
//! assert_eq!(msg.reactions.len(), 1);
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Sender name used when the source document carries no identifiable author.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// A normalized chat message extracted from one export document.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name of the author, `"Unknown"` fallback |
/// | `timestamp` | `Option<DateTime<FixedOffset>>` | When the message was sent |
/// | `text` | `String` | Text content, empty when absent |
/// | `sticker` | `Option<String>` | Relative href of a sticker asset |
/// | `reactions` | `Vec<Reaction>` | Emoji annotations, document order |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// When the message was sent, with the export's original UTC offset.
    ///
    /// `None` when the document carries no parseable date element.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<FixedOffset>>,

    /// Text content of the message. Empty when absent, never null.
    pub text: String,

    /// Reference to a sticker asset (relative path within the export).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub sticker: Option<String>,

    /// Reactions attached to the message, in document order.
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl Message {
    /// Creates a new message with only sender and text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::Message;
    ///
    /// let msg = Message::new("Alice", "Hello!");
    /// assert_eq!(msg.sender, "Alice");
    /// assert!(msg.timestamp.is_none());
    /// ```
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            timestamp: None,
            text: text.into(),
            sticker: None,
            reactions: Vec::new(),
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Builder method to set the sticker reference.
    #[must_use]
    pub fn with_sticker(mut self, href: impl Into<String>) -> Self {
        self.sticker = Some(href.into());
        self
    }

    /// Builder method to append one reaction.
    #[must_use]
    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reactions.push(reaction);
        self
    }

    /// Builder method to replace the reaction list.
    #[must_use]
    pub fn with_reactions(mut self, reactions: Vec<Reaction>) -> Self {
        self.reactions = reactions;
        self
    }

    /// Character count of the message text.
    ///
    /// Computed at analysis time, never stored. Counts Unicode scalar
    /// values, so emoji and non-ASCII text count once per character.
    pub fn message_length(&self) -> usize {
        self.text.chars().count()
    }

    /// Total number of reaction credits on this message: one per user per
    /// reaction, duplicates included.
    pub fn reaction_credits(&self) -> usize {
        self.reactions.iter().map(|r| r.users.len()).sum()
    }
}

/// An emoji annotation attached to a message.
///
/// `users` lists the display names of everyone who applied this emoji, one
/// entry per person, in document order. Duplicates from the source are
/// preserved, not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// The emoji, `None` when the emoji element was missing or unparsable.
    pub emoji: Option<String>,

    /// Display names of the reacting users, document order.
    pub users: Vec<String>,
}

impl Reaction {
    /// Creates a reaction from an optional emoji and a user list.
    pub fn new(emoji: Option<impl Into<String>>, users: Vec<String>) -> Self {
        Self {
            emoji: emoji.map(Into::into),
            users,
        }
    }
}

/// Encodes a reaction list into the textual nested-structure form stored in
/// the messages table's `reactions` column.
///
/// The encoding is JSON: exact, order-preserving, and lossless — see
/// [`decode_reactions`] for the inverse.
pub fn encode_reactions(reactions: &[Reaction]) -> crate::error::Result<String> {
    Ok(serde_json::to_string(reactions)?)
}

/// Decodes the `reactions` column back into a [`Reaction`] sequence.
///
/// Accepts only well-formed encodings; anything else (truncated cell, stray
/// text, wrong shape) yields an empty list so downstream statistics passes
/// stay total. An empty or whitespace-only cell is also an empty list.
///
/// # Example
///
/// ```rust
/// use chatstat::message::decode_reactions;
///
/// assert!(decode_reactions("not json").is_empty());
/// assert!(decode_reactions("").is_empty());
/// assert_eq!(decode_reactions(r#"[{"emoji":"👍","users":["Bob"]}]"#).len(), 1);
/// ```
pub fn decode_reactions(cell: &str) -> Vec<Reaction> {
    if cell.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(cell).unwrap_or_default()
}
