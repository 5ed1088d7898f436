//! Command-line interface definition using clap.

use clap::Parser;

/// Analyze a Telegram HTML chat export: build a message table and derive
/// per-sender statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat html_messages
    chatstat html_messages -o data")]
pub struct Args {
    /// Directory containing the exported HTML documents
    pub input: String,

    /// Directory to write the message table and result tables into
    #[arg(short, long, default_value = "data")]
    pub output: String,
}
