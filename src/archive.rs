//! Archive loading and the persisted messages table.
//!
//! An archive is a directory of HTML export documents. [`load_archive`]
//! extracts every document and concatenates the results into one in-memory
//! table; [`write_messages_csv`] persists that table with one row per
//! message. Every pipeline run rebuilds the table from scratch (overwrite
//! semantics, no incremental update).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChatstatError, Result};
use crate::extract::Extractor;
use crate::message::{encode_reactions, Message};

/// Header of the messages table.
pub const MESSAGES_HEADER: [&str; 5] = ["sender", "timestamp", "message", "sticker", "reactions"];

/// Extracts every `*.html` document under `dir` into one message table.
///
/// Files are processed in lexicographic name order so the merged table is
/// deterministic regardless of how the OS enumerates the directory.
/// Per-file document order is preserved; files are not re-sorted against
/// each other chronologically. Non-HTML files are ignored.
///
/// # Errors
///
/// [`ChatstatError::InputUnavailable`] when `dir` is missing or unreadable;
/// I/O errors from individual files surface as-is.
pub fn load_archive(dir: &Path) -> Result<Vec<Message>> {
    let entries =
        fs::read_dir(dir).map_err(|e| ChatstatError::input_unavailable(dir, e.to_string()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    files.sort();

    let extractor = Extractor::new();
    let mut messages = Vec::new();
    for file in &files {
        messages.extend(extractor.parse(file)?);
    }
    Ok(messages)
}

/// Persists the merged message table.
///
/// Columns: `sender, timestamp, message, sticker, reactions`. Timestamps are
/// written as RFC 3339 (offset preserved) or an empty cell; the sticker cell
/// is empty when absent; reactions use the lossless JSON encoding from
/// [`encode_reactions`].
pub fn write_messages_csv(messages: &[Message], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(MESSAGES_HEADER)?;

    for msg in messages {
        let timestamp = msg.timestamp.map(|ts| ts.to_rfc3339()).unwrap_or_default();
        let reactions = encode_reactions(&msg.reactions)?;
        writer.write_record([
            msg.sender.as_str(),
            timestamp.as_str(),
            msg.text.as_str(),
            msg.sticker.as_deref().unwrap_or_default(),
            reactions.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::tempdir;

    fn write_doc(dir: &Path, name: &str, senders_and_texts: &[(&str, &str)]) {
        let body: String = senders_and_texts
            .iter()
            .map(|(sender, text)| {
                format!(
                    r#"<div class="message default clearfix">
                         <div class="from_name">{sender}</div>
                         <div class="text">{text}</div>
                       </div>"#
                )
            })
            .collect();
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_load_archive_missing_dir_is_input_unavailable() {
        let err = load_archive(Path::new("/no/such/archive")).unwrap_err();
        assert!(err.is_input_unavailable());
    }

    #[test]
    fn test_load_archive_lexicographic_file_order() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "messages2.html", &[("B", "second file")]);
        write_doc(dir.path(), "messages.html", &[("A", "first file")]);

        let messages = load_archive(dir.path()).unwrap();
        let texts: Vec<_> = messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first file", "second file"]);
    }

    #[test]
    fn test_load_archive_ignores_non_html() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "messages.html", &[("A", "hi")]);
        fs::write(dir.path().join("notes.txt"), "not an export").unwrap();
        fs::write(dir.path().join("style.css"), ".x{}").unwrap();

        let messages = load_archive(dir.path()).unwrap();
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_write_messages_csv_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_messages.csv");
        let messages = vec![
            Message::new("Alice", "Hello"),
            Message::new("Bob", "").with_sticker("stickers/duck.webp"),
        ];

        write_messages_csv(&messages, &path).unwrap();

        let mut content = String::new();
        fs::File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "sender,timestamp,message,sticker,reactions"
        );
        assert!(content.contains("Alice"));
        assert!(content.contains("stickers/duck.webp"));
    }
}
