//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser;

use chatstat::archive::{load_archive, write_messages_csv};
use chatstat::cli::Args;
use chatstat::stats::run_pipeline;
use chatstat::table::read_messages_csv;
use chatstat::ChatstatError;

/// File name of the merged message table inside the output directory.
const MESSAGES_TABLE: &str = "all_messages.csv";

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let args = Args::parse();

    println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", args.output);
    println!();

    let out_dir = Path::new(&args.output);
    fs::create_dir_all(out_dir)?;

    // Stage 1: extract and merge the archive
    println!("⏳ Extracting archive...");
    let parse_start = Instant::now();
    let extracted = load_archive(Path::new(&args.input))?;
    println!(
        "   Found {} messages ({:.2}s)",
        extracted.len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Stage 2: persist the message table
    let table_path = out_dir.join(MESSAGES_TABLE);
    println!("💾 Writing {}...", table_path.display());
    write_messages_csv(&extracted, &table_path)?;

    // Stage 3: reload with typed-field reconstruction
    let table = read_messages_csv(&table_path)?;

    // Stage 4: statistics fan-out
    println!("📈 Computing statistics...");
    let report = run_pipeline(&table, out_dir);

    for failure in &report.failures {
        eprintln!("⚠️  {}", failure.error);
    }

    println!();
    println!("📊 Summary:");
    println!("   Total messages: {}", report.summary.total_messages);
    match report.summary.first {
        Some(first) => println!("   First message:  {}", first),
        None => println!("   First message:  (no dated messages)"),
    }
    match report.summary.last {
        Some(last) => println!("   Last message:   {}", last),
        None => println!("   Last message:   (no dated messages)"),
    }

    println!();
    if report.is_clean() {
        println!(
            "✅ Done! Tables saved to {} ({:.2}s)",
            args.output,
            total_start.elapsed().as_secs_f64()
        );
    } else {
        println!(
            "⚠️  Finished with {} failed table(s) ({:.2}s)",
            report.failures.len(),
            total_start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}
