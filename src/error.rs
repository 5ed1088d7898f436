//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Fatal** conditions (a missing input directory, an unwritable messages
//!   table) surface as errors and abort the stage that hit them.
//! - **Malformed fields** (an unparsable timestamp, a corrupt reactions cell)
//!   are not errors at all: they degrade to documented defaults inside the
//!   extraction and table-reading code, so the statistics passes stay total.
//! - **Per-pass write failures** are carried in [`ChatstatError::OutputWrite`]
//!   and reported without aborting sibling passes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
///
/// Each variant carries enough context (file path, table name) to be
/// actionable without a debugger.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - An export file cannot be read
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A required input is missing: the export directory or the persisted
    /// messages table does not exist or cannot be opened.
    ///
    /// This is fatal for the stage that needs the input; stages that do not
    /// depend on it are unaffected.
    #[error("input unavailable: {}: {reason}", path.display())]
    InputUnavailable {
        /// The directory or file that could not be used
        path: PathBuf,
        /// Why it could not be used
        reason: String,
    },

    /// A result table could not be persisted.
    ///
    /// Reported per statistics pass; sibling passes keep running.
    #[error("failed to write {table}: {source}")]
    OutputWrite {
        /// The table that failed to write (e.g. "message_length_stats.csv")
        table: String,
        /// The underlying writer error
        #[source]
        source: Box<ChatstatError>,
    },

    /// CSV reading/writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error (reactions column encoding).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates an [`InputUnavailable`](ChatstatError::InputUnavailable) error.
    pub fn input_unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ChatstatError::InputUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wraps an error as an [`OutputWrite`](ChatstatError::OutputWrite)
    /// failure for the named result table.
    pub fn output_write(table: impl Into<String>, source: ChatstatError) -> Self {
        ChatstatError::OutputWrite {
            table: table.into(),
            source: Box::new(source),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if this is a missing-input error.
    pub fn is_input_unavailable(&self) -> bool {
        matches!(self, ChatstatError::InputUnavailable { .. })
    }

    /// Returns `true` if this is a per-table write failure.
    pub fn is_output_write(&self) -> bool {
        matches!(self, ChatstatError::OutputWrite { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
