//! Sticker usage counts.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::message::Message;

/// Counts how often each sticker asset appears in the table.
///
/// Rows without a sticker are ignored. The result is sorted by count
/// descending, ties by sticker reference ascending.
pub fn sticker_usage(messages: &[Message]) -> Vec<(String, u64)> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for msg in messages {
        if let Some(href) = &msg.sticker {
            *counts.entry(href.clone()).or_default() += 1;
        }
    }

    let mut usage: Vec<(String, u64)> = counts.into_iter().collect();
    // stable sort on a name-sorted list keeps ties in ascending name order
    usage.sort_by(|a, b| b.1.cmp(&a.1));
    usage
}

/// Writes the usage table: `sticker_ref,count`, most used first.
pub fn write_sticker_usage(usage: &[(String, u64)], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["sticker_ref", "count"])?;

    for (sticker, count) in usage {
        let count = count.to_string();
        writer.write_record([sticker.as_str(), count.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
