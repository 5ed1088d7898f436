//! # Chatstat
//!
//! A Rust library for turning a Telegram HTML chat export into a normalized
//! message table and per-sender communication statistics.
//!
//! ## Overview
//!
//! The pipeline has four stages, each a pure function of the previous one:
//!
//! 1. **Extract** — [`extract::Extractor`] reads one export document and
//!    emits [`Message`] records using a fixed selector rule table.
//! 2. **Load** — [`archive::load_archive`] runs the extractor over every
//!    document in a directory and [`archive::write_messages_csv`] persists
//!    the merged table.
//! 3. **Reload** — [`table::read_messages_csv`] reconstructs typed fields
//!    (timestamps, nested reactions) from the persisted table, degrading
//!    malformed cells to defaults instead of failing.
//! 4. **Aggregate** — [`stats::run_pipeline`] fans out into independent
//!    passes (message length, reactions, response time, sticker usage) and
//!    writes one result table per pass.
//!
//! Every run recomputes everything from the source documents; outputs are
//! overwritten, so re-running is always safe.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let messages = load_archive(Path::new("html_messages"))?;
//!     write_messages_csv(&messages, Path::new("data/all_messages.csv"))?;
//!
//!     let table = read_messages_csv(Path::new("data/all_messages.csv"))?;
//!     let report = run_pipeline(&table, Path::new("data"));
//!     println!("{} messages analyzed", report.summary.total_messages);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`extract`] — HTML document extractor and selector rule table
//! - [`archive`] — directory enumeration, merge, messages-table writer
//! - [`table`] — messages-table reader with total field reconstruction
//! - [`stats`] — the aggregation passes and their result-table writers
//! - [`message`] — [`Message`] and [`Reaction`] plus the reactions encoding
//! - [`error`] — unified error types ([`ChatstatError`], [`Result`])
//! - [`cli`] — CLI argument types
//! - [`prelude`] — convenient re-exports

pub mod archive;
pub mod cli;
pub mod error;
pub mod extract;
pub mod message;
pub mod stats;
pub mod table;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::{Message, Reaction};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::archive::{load_archive, write_messages_csv};
    pub use crate::error::{ChatstatError, Result};
    pub use crate::extract::Extractor;
    pub use crate::stats::{run_pipeline, PipelineReport, TotalSummary};
    pub use crate::table::read_messages_csv;
    pub use crate::{Message, Reaction};
}
