//! Per-sender message-length statistics.

use std::collections::BTreeMap;

use crate::message::Message;
use crate::stats::aggregate::{describe, Aggregate};

/// Groups the table by sender and aggregates the character count of each
/// message's text.
///
/// Empty texts count as length 0; every sender in the table gets a row.
/// Rows sort by sender name.
pub fn message_length_stats(messages: &[Message]) -> BTreeMap<String, Aggregate> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for msg in messages {
        groups
            .entry(msg.sender.clone())
            .or_default()
            .push(msg.message_length() as f64);
    }

    groups
        .into_iter()
        .map(|(sender, lengths)| (sender, describe(&lengths)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_sender() {
        let messages = vec![
            Message::new("Alice", "hi"),        // 2
            Message::new("Alice", "hello"),     // 5
            Message::new("Alice", "hi"),        // 2
            Message::new("Bob", "a long line"), // 11
        ];
        let stats = message_length_stats(&messages);

        let alice = &stats["Alice"];
        assert_eq!(alice.mean, Some(3.0));
        assert_eq!(alice.median, Some(2.0));
        assert_eq!(alice.mode, Some(2.0));

        let bob = &stats["Bob"];
        assert_eq!(bob.mean, Some(11.0));
    }

    #[test]
    fn test_empty_text_counts_as_zero() {
        let stats = message_length_stats(&[Message::new("Alice", "")]);
        assert_eq!(stats["Alice"].mean, Some(0.0));
    }

    #[test]
    fn test_length_is_character_count() {
        let stats = message_length_stats(&[Message::new("Иван", "Привет")]);
        assert_eq!(stats["Иван"].mean, Some(6.0));
    }

    #[test]
    fn test_rows_sorted_by_sender() {
        let messages = vec![Message::new("Zoe", "x"), Message::new("Amy", "y")];
        let stats = message_length_stats(&messages);
        let senders: Vec<_> = stats.keys().cloned().collect();
        assert_eq!(senders, vec!["Amy", "Zoe"]);
    }
}
