//! Descriptive aggregates shared by the per-sender statistics passes.
//!
//! Every grouped pass reduces its samples through [`describe`], which
//! produces mean, median and mode with one fixed tie-break rule, so the same
//! numbers come out of every run regardless of input order.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

/// Mean, median and mode of one sample.
///
/// All three are `None` for an empty sample; a group that exists but has no
/// defined values still gets a row with empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregate {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<f64>,
}

/// Computes mean, median and mode of a sample.
///
/// - Median of an even-sized sample is the midpoint of the two middle
///   values.
/// - Mode tie-break: the smallest value among the most frequent. The rule is
///   deterministic and stable across runs.
///
/// # Example
///
/// ```rust
/// use chatstat::stats::aggregate::describe;
///
/// let agg = describe(&[1.0, 2.0, 2.0, 9.0]);
/// assert_eq!(agg.mean, Some(3.5));
/// assert_eq!(agg.median, Some(2.0));
/// assert_eq!(agg.mode, Some(2.0));
///
/// assert_eq!(describe(&[]).mean, None);
/// ```
pub fn describe(values: &[f64]) -> Aggregate {
    if values.is_empty() {
        return Aggregate::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Aggregate {
        mean: Some(sorted.iter().sum::<f64>() / sorted.len() as f64),
        median: Some(median_of_sorted(&sorted)),
        mode: Some(mode_of_sorted(&sorted)),
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Smallest value among the most frequent. The slice is sorted ascending, so
/// the first run of maximal length wins.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut current = sorted[0];
    let mut count = 0usize;

    for &value in sorted {
        if value == current {
            count += 1;
        } else {
            current = value;
            count = 1;
        }
        if count > best_count {
            best = current;
            best_count = count;
        }
    }
    best
}

/// Writes a per-sender aggregate table: `sender,mean,median,mode`, one row
/// per sender in key order, empty cells for undefined aggregates.
pub fn write_sender_aggregates(stats: &BTreeMap<String, Aggregate>, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["sender", "mean", "median", "mode"])?;

    for (sender, agg) in stats {
        let (mean, median, mode) = (cell(agg.mean), cell(agg.median), cell(agg.mode));
        writer.write_record([sender.as_str(), mean.as_str(), median.as_str(), mode.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
