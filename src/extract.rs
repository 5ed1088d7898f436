//! Telegram HTML export extractor.
//!
//! One export document holds one conversation dump: a flat list of
//! `<div class="message default clearfix">` containers. The extractor walks
//! them in document order and emits one [`Message`] per container, applying
//! the field rules below. Extraction is total: missing optional structure
//! degrades to the field's documented default and never errors.
//!
//! # Field rules
//!
//! | Source element | Field | Default |
//! |---|---|---|
//! | `div.from_name` text | `sender` | `"Unknown"` when absent |
//! | `div[class="pull_right date details"]` `title` | `timestamp` | `None` |
//! | `div.text` text | `text` | `""` |
//! | `a[class="sticker_wrap clearfix pull_left"]` `href` | `sticker` | `None` |
//! | `div.reaction` → `div.emoji` text + `div.initials` `title`s | `reactions` | `[]` |
//!
//! Container matching is an exact class-attribute match, so service rows and
//! `message default clearfix joined` continuations (which carry no sender of
//! their own) are skipped.

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::message::{Message, Reaction, UNKNOWN_SENDER};

/// Date format used by the export's `title` attribute,
/// e.g. `15.06.2024 12:30:05 UTC+0200`.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S UTC%z";

/// Parses an export date string into a timezone-aware instant.
///
/// Returns `None` for anything that does not match
/// [`EXPORT_TIMESTAMP_FORMAT`]; callers treat that as a missing timestamp.
pub fn parse_export_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw.trim(), EXPORT_TIMESTAMP_FORMAT).ok()
}

/// The compiled selector rule table.
///
/// One selector per extracted field, compiled once and reused across every
/// document in the archive. Kept separate from the traversal logic so the
/// rule set is testable in isolation.
#[derive(Debug)]
pub struct Selectors {
    /// Message container; exact class attribute so `joined` rows don't match.
    pub message: Selector,
    /// Sender display name.
    pub from_name: Selector,
    /// Date element carrying the `title` timestamp attribute.
    pub date: Selector,
    /// Message body text.
    pub text: Selector,
    /// Sticker anchor carrying the asset `href`.
    pub sticker: Selector,
    /// One per reaction emoji group.
    pub reaction: Selector,
    /// Emoji inside a reaction group.
    pub emoji: Selector,
    /// One per reacting user inside a group; `title` holds the display name.
    pub initials: Selector,
}

impl Selectors {
    pub fn new() -> Self {
        Self {
            message: sel(r#"div[class="message default clearfix"]"#),
            from_name: sel("div.from_name"),
            date: sel(r#"div[class="pull_right date details"]"#),
            text: sel("div.text"),
            sticker: sel(r#"a[class="sticker_wrap clearfix pull_left"]"#),
            reaction: sel("div.reaction"),
            emoji: sel("div.emoji"),
            initials: sel("div.initials"),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new()
    }
}

// All inputs are literals defined above; a parse failure is a bug, not a
// runtime condition.
fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// Extractor for Telegram HTML export documents.
///
/// # Example
///
/// ```rust
/// use chatstat::extract::Extractor;
///
/// let html = r#"
///   <div class="message default clearfix">
///     <div class="pull_right date details" title="15.06.2024 12:30:05 UTC+0200"></div>
///     <div class="from_name">Alice</div>
///     <div class="text">Hello!</div>
///   </div>"#;
///
/// let extractor = Extractor::new();
/// let messages = extractor.parse_str(html);
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].sender, "Alice");
/// assert_eq!(messages[0].text, "Hello!");
/// assert!(messages[0].timestamp.is_some());
/// ```
pub struct Extractor {
    selectors: Selectors,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            selectors: Selectors::new(),
        }
    }

    /// Reads and extracts one export document.
    ///
    /// # Errors
    ///
    /// Only I/O failures surface; malformed markup degrades per the field
    /// rules and never errors.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Extracts messages from document content, in document order.
    ///
    /// A message is emitted only when its extracted sender is non-empty;
    /// containers with a present-but-blank `from_name` are silently skipped.
    pub fn parse_str(&self, html: &str) -> Vec<Message> {
        let document = Html::parse_document(html);

        document
            .select(&self.selectors.message)
            .filter_map(|container| self.extract_message(container))
            .collect()
    }

    fn extract_message(&self, container: ElementRef<'_>) -> Option<Message> {
        let sender = match container.select(&self.selectors.from_name).next() {
            Some(el) => element_text(el),
            None => UNKNOWN_SENDER.to_string(),
        };
        if sender.is_empty() {
            return None;
        }

        let timestamp = container
            .select(&self.selectors.date)
            .next()
            .and_then(|el| el.value().attr("title"))
            .and_then(parse_export_timestamp);

        let text = container
            .select(&self.selectors.text)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let sticker = container
            .select(&self.selectors.sticker)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(ToString::to_string);

        let reactions = container
            .select(&self.selectors.reaction)
            .map(|group| self.extract_reaction(group))
            .collect();

        Some(Message {
            sender,
            timestamp,
            text,
            sticker,
            reactions,
        })
    }

    fn extract_reaction(&self, group: ElementRef<'_>) -> Reaction {
        let emoji = group
            .select(&self.selectors.emoji)
            .next()
            .map(element_text);

        let users = group
            .select(&self.selectors.initials)
            .filter_map(|el| el.value().attr("title"))
            .map(ToString::to_string)
            .collect();

        Reaction { emoji, users }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenated text of an element and its descendants, trimmed.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
