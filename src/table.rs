//! Reloading the persisted messages table.
//!
//! The statistics passes never touch the HTML archive; they consume the
//! table written by [`crate::archive::write_messages_csv`] after it has been
//! reloaded here. Reconstruction of typed fields is total: any cell that
//! fails to parse degrades to its documented default so every downstream
//! aggregation stays total.
//!
//! | Cell | Reconstruction | Degraded value |
//! |---|---|---|
//! | `timestamp` | RFC 3339 parse | `None` |
//! | `message` | as-is | `""` when absent |
//! | `sticker` | as-is | `None` when empty |
//! | `reactions` | JSON decode | `[]` when malformed |

use std::path::Path;

use chrono::DateTime;

use crate::error::{ChatstatError, Result};
use crate::message::{decode_reactions, Message};

/// Reloads the messages table written by the archive loader.
///
/// # Errors
///
/// [`ChatstatError::InputUnavailable`] when the table file cannot be opened;
/// row-level CSV errors surface as [`ChatstatError::Csv`]. Cell-level
/// malformation never errors (see module docs).
pub fn read_messages_csv(path: &Path) -> Result<Vec<Message>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| ChatstatError::input_unavailable(path, e.to_string()))?;

    let mut messages = Vec::new();
    for record in reader.records() {
        let record = record?;
        messages.push(reconstruct_row(&record));
    }
    Ok(messages)
}

fn reconstruct_row(record: &csv::StringRecord) -> Message {
    let cell = |i: usize| record.get(i).unwrap_or_default();

    let timestamp = DateTime::parse_from_rfc3339(cell(1)).ok();

    let sticker = match cell(3) {
        "" => None,
        href => Some(href.to_string()),
    };

    Message {
        sender: cell(0).to_string(),
        timestamp,
        text: cell(2).to_string(),
        sticker,
        reactions: decode_reactions(cell(4)),
    }
}
