//! # chatframe CLI
//!
//! Command-line interface for the chatframe library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatframe::cli::Args;
use chatframe::config::ParserConfig;
use chatframe::filter::{apply_filters, FilterConfig};
use chatframe::output::{write_to_format, OutputConfig, OutputFormat};
use chatframe::{ChatframeError, TranscriptParser};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatframeError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Determine output extension based on format
    let output_path = adjust_output_extension(&args.output, args.format);

    // Print header
    println!("📦 chatframe v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    if let Some(ref author) = args.author {
        filter_config = filter_config.with_author(author.clone());
        println!("👤 Author:  {}", author);
    }

    println!();

    // Step 1: Parse the transcript
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let parser_config = ParserConfig::new().with_keep_media(args.keep_media);
    let parser = TranscriptParser::with_config(parser_config);
    let table = parser.parse(Path::new(&args.input))?;
    let parse_time = parse_start.elapsed();

    let original_count = table.len();
    let author_count = table.authors().len();
    println!(
        "   Found {} records from {} authors ({:.2}s)",
        original_count,
        author_count,
        parse_time.as_secs_f64()
    );

    // Step 2: Filter
    let records = table.into_records();
    let final_records = if filter_config.is_active() {
        println!("🔍 Filtering records...");
        let filter_start = Instant::now();
        let filtered = apply_filters(records, &filter_config);
        let filter_time = filter_start.elapsed();
        println!(
            "   {} records after filtering ({:.2}s)",
            filtered.len(),
            filter_time.as_secs_f64()
        );
        filtered
    } else {
        records
    };

    // Step 3: Write output in selected format
    let output_config = OutputConfig::new().with_derived(!args.basic_columns);
    let lib_format: OutputFormat = args.format.into();
    println!("💾 Writing {}...", lib_format);
    let write_start = Instant::now();
    write_to_format(&final_records, &output_path, lib_format, &output_config)?;
    let write_time = write_start.elapsed();
    println!("   Written in {:.2}s", write_time.as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {} records", original_count);
    if filter_config.is_active() {
        println!("   Filtered:  {} records", final_records.len());
    }
    println!("   Authors:   {}", author_count);

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let records_per_sec = original_count as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} records/sec", records_per_sec);

    Ok(())
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: chatframe::cli::OutputFormat) -> String {
    if output != "records.csv" {
        return output.to_string();
    }

    let lib_format: OutputFormat = format.into();
    format!("records.{}", lib_format.extension())
}
