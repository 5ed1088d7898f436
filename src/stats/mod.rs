//! Statistics engine: independent aggregation passes over the reloaded
//! message table.
//!
//! Every pass is a pure function from the immutable table to an explicit
//! accumulator structure; the only external effect is each pass writing its
//! own result table. [`run_pipeline`] fans out to all of them and collects
//! per-pass write failures without letting one abort the others.
//!
//! # Result tables
//!
//! | Pass | File | Columns |
//! |---|---|---|
//! | message length | `message_length_stats.csv` | `sender,mean,median,mode` |
//! | reaction totals | `reaction_stats.csv` | `sender,total_reactions_received` |
//! | detailed reactions | `detailed_reactions.csv` | `user,<sender...>` |
//! | response time | `response_time_stats.csv` | `sender,mean,median,mode` (minutes) |
//! | sticker usage | `sticker_usage.csv` | `sticker_ref,count` |
//!
//! The total summary is printed, never persisted.

pub mod aggregate;
pub mod length;
pub mod reactions;
pub mod response;
pub mod stickers;
pub mod summary;

use std::path::Path;

use crate::error::{ChatstatError, Result};
use crate::message::Message;

pub use aggregate::{describe, write_sender_aggregates, Aggregate};
pub use length::message_length_stats;
pub use reactions::{reaction_stats, write_detailed_matrix, write_reaction_totals, ReactionStats};
pub use response::{response_time_stats, response_times};
pub use stickers::{sticker_usage, write_sticker_usage};
pub use summary::{total_stat, TotalSummary};

/// Result table file names, relative to the output directory.
pub const MESSAGE_LENGTH_TABLE: &str = "message_length_stats.csv";
pub const REACTION_TOTALS_TABLE: &str = "reaction_stats.csv";
pub const DETAILED_REACTIONS_TABLE: &str = "detailed_reactions.csv";
pub const RESPONSE_TIME_TABLE: &str = "response_time_stats.csv";
pub const STICKER_USAGE_TABLE: &str = "sticker_usage.csv";

/// One pass's write failure, reported without aborting sibling passes.
#[derive(Debug)]
pub struct StageFailure {
    /// The result table that could not be written.
    pub table: &'static str,
    pub error: ChatstatError,
}

/// Outcome of a full statistics run: the printed summary plus any per-pass
/// write failures.
#[derive(Debug)]
pub struct PipelineReport {
    pub summary: TotalSummary,
    pub failures: Vec<StageFailure>,
}

impl PipelineReport {
    /// Returns `true` when every result table was written.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs every statistics pass over the table, writing one result table per
/// pass into `out_dir`.
///
/// A pass that fails to persist is recorded in the report and the remaining
/// passes still run; nothing here is fatal.
pub fn run_pipeline(messages: &[Message], out_dir: &Path) -> PipelineReport {
    let summary = total_stat(messages);
    let mut failures = Vec::new();
    let mut record = |table: &'static str, result: Result<()>| {
        if let Err(error) = result {
            failures.push(StageFailure {
                table,
                error: ChatstatError::output_write(table, error),
            });
        }
    };

    let lengths = message_length_stats(messages);
    record(
        MESSAGE_LENGTH_TABLE,
        write_sender_aggregates(&lengths, &out_dir.join(MESSAGE_LENGTH_TABLE)),
    );

    let reactions = reaction_stats(messages);
    record(
        REACTION_TOTALS_TABLE,
        write_reaction_totals(&reactions, &out_dir.join(REACTION_TOTALS_TABLE)),
    );
    record(
        DETAILED_REACTIONS_TABLE,
        write_detailed_matrix(&reactions, &out_dir.join(DETAILED_REACTIONS_TABLE)),
    );

    let responses = response_time_stats(messages);
    record(
        RESPONSE_TIME_TABLE,
        write_sender_aggregates(&responses, &out_dir.join(RESPONSE_TIME_TABLE)),
    );

    let stickers = sticker_usage(messages);
    record(
        STICKER_USAGE_TABLE,
        write_sticker_usage(&stickers, &out_dir.join(STICKER_USAGE_TABLE)),
    );

    PipelineReport { summary, failures }
}
