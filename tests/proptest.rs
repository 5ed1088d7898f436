//! Property-based tests for chatstat.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use chatstat::message::{decode_reactions, encode_reactions};
use chatstat::prelude::*;
use chatstat::stats::aggregate::describe;
use chatstat::stats::{reaction_stats, response_times};

/// Generate a random Reaction using fast strategies (no regex!)
fn arb_reaction() -> impl Strategy<Value = Reaction> {
    (
        prop::option::of(prop::sample::select(vec![
            "👍".to_string(),
            "🔥".to_string(),
            "❤".to_string(),
            String::new(),
            "not an emoji".to_string(),
        ])),
        prop::collection::vec(
            prop::sample::select(vec![
                "Alice".to_string(),
                "Bob".to_string(),
                "Иван".to_string(),
                "User, with \"chars\"".to_string(),
            ]),
            0..4,
        ),
    )
        .prop_map(|(emoji, users)| Reaction { emoji, users })
}

fn arb_message() -> impl Strategy<Value = Message> {
    (
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Charlie".to_string(),
            "Unknown".to_string(),
        ]),
        prop::sample::select(vec![
            "Hello".to_string(),
            String::new(),
            "Привет мир".to_string(),
            "Special;chars\"here\nnewline".to_string(),
            "🎉🔥💀 emoji".to_string(),
        ]),
        prop::collection::vec(arb_reaction(), 0..3),
    )
        .prop_map(|(sender, text, reactions)| Message {
            sender,
            timestamp: None,
            text,
            sticker: None,
            reactions,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // REACTION ENCODING PROPERTIES
    // ============================================

    /// Encode then decode is the identity, including null emoji, empty user
    /// lists, and duplicate users.
    #[test]
    fn reaction_encoding_round_trips(reactions in prop::collection::vec(arb_reaction(), 0..6)) {
        let encoded = encode_reactions(&reactions).unwrap();
        prop_assert_eq!(decode_reactions(&encoded), reactions);
    }

    /// Decoding arbitrary text never panics and yields a (possibly empty) list.
    #[test]
    fn decode_is_total(cell in ".{0,80}") {
        let _ = decode_reactions(&cell);
    }

    // ============================================
    // STATISTICS PROPERTIES
    // ============================================

    /// Sum of per-message reaction credits equals the sum of totals across
    /// senders.
    #[test]
    fn reaction_totals_balance(messages in prop::collection::vec(arb_message(), 0..15)) {
        let credit_sum: usize = messages.iter().map(Message::reaction_credits).sum();
        let stats = reaction_stats(&messages);
        prop_assert_eq!(stats.total_credits(), credit_sum as u64);
    }

    /// Every matrix cell is backed by at least one credit, and column sums
    /// reproduce the totals.
    #[test]
    fn matrix_columns_sum_to_totals(messages in prop::collection::vec(arb_message(), 0..15)) {
        let stats = reaction_stats(&messages);
        for (sender, total) in &stats.totals {
            let column_sum: u64 = stats
                .matrix
                .values()
                .filter_map(|row| row.get(sender))
                .sum();
            prop_assert_eq!(column_sum, *total);
        }
    }

    /// The first row never has a response time, and rows never respond to
    /// their own sender.
    #[test]
    fn response_time_nullness(messages in prop::collection::vec(arb_message(), 0..15)) {
        let times = response_times(&messages);
        prop_assert_eq!(times.len(), messages.len());
        if let Some(first) = times.first() {
            prop_assert!(first.is_none());
        }
        for i in 1..messages.len() {
            if messages[i].sender == messages[i - 1].sender {
                prop_assert!(times[i].is_none());
            }
        }
    }

    /// describe() is permutation-invariant.
    #[test]
    fn describe_ignores_input_order(mut values in prop::collection::vec(0.0f64..100.0, 0..20)) {
        let forward = describe(&values);
        values.reverse();
        prop_assert_eq!(describe(&values), forward);
    }

    /// message_length always equals the character count of the text.
    #[test]
    fn message_length_matches_chars(msg in arb_message()) {
        prop_assert_eq!(msg.message_length(), msg.text.chars().count());
    }
}
