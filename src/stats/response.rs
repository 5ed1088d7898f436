//! Per-sender response-time statistics.
//!
//! The pass walks the table in the order received. It does NOT sort by
//! timestamp first: the archive loader concatenates files by name, so gaps
//! straddling a file boundary can be computed between temporally unrelated
//! messages. That matches the behavior this table has always had; callers
//! who want chronological gaps must sort before persisting.

use std::collections::BTreeMap;

use crate::message::Message;
use crate::stats::aggregate::{describe, Aggregate};

/// Response time per row, in minutes.
///
/// A row's value is defined only when the previous row exists, was sent by a
/// different sender, and both rows carry a timestamp; otherwise it is
/// `None`. The first row is always `None`.
pub fn response_times(messages: &[Message]) -> Vec<Option<f64>> {
    let mut times = Vec::with_capacity(messages.len());

    for (i, msg) in messages.iter().enumerate() {
        let value = if i == 0 {
            None
        } else {
            let prev = &messages[i - 1];
            if prev.sender == msg.sender {
                None
            } else {
                match (msg.timestamp, prev.timestamp) {
                    (Some(current), Some(previous)) => {
                        Some((current - previous).num_seconds() as f64 / 60.0)
                    }
                    _ => None,
                }
            }
        };
        times.push(value);
    }

    times
}

/// Groups defined response times by the responding sender and aggregates
/// them.
///
/// Every sender in the table gets a row; a sender with no defined response
/// time gets null mean/median/mode. Undefined rows are excluded from the
/// aggregates, not treated as zero.
pub fn response_time_stats(messages: &[Message]) -> BTreeMap<String, Aggregate> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for msg in messages {
        groups.entry(msg.sender.clone()).or_default();
    }

    for (msg, time) in messages.iter().zip(response_times(messages)) {
        if let Some(minutes) = time {
            groups
                .entry(msg.sender.clone())
                .or_default()
                .push(minutes);
        }
    }

    groups
        .into_iter()
        .map(|(sender, times)| (sender, describe(&times)))
        .collect()
}
