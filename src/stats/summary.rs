//! Whole-table summary: row count and timestamp range.

use chrono::{DateTime, FixedOffset};

use crate::message::Message;

/// Row count plus the earliest and latest timestamps in the table.
///
/// A pure report: the binary prints it, nothing persists it. Rows with a
/// null timestamp count toward `total_messages` but are excluded from the
/// range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalSummary {
    pub total_messages: usize,
    pub first: Option<DateTime<FixedOffset>>,
    pub last: Option<DateTime<FixedOffset>>,
}

/// Computes the whole-table summary.
pub fn total_stat(messages: &[Message]) -> TotalSummary {
    TotalSummary {
        total_messages: messages.len(),
        first: messages.iter().filter_map(|m| m.timestamp).min(),
        last: messages.iter().filter_map(|m| m.timestamp).max(),
    }
}
