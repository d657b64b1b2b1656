//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options as a clap `ValueEnum`
//!
//! The CLI format enum mirrors [`crate::output::OutputFormat`] so the
//! library type stays free of clap derives; `From` bridges the two.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Convert WhatsApp chat exports into a structured record table
/// (CSV, JSON, or JSONL) with derived temporal columns.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatframe")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatframe chat.txt
    chatframe chat.txt -o records.json --format json
    chatframe chat.txt --after 2024-01-01 --before 2024-06-30
    chatframe chat.txt --author Alice --format jsonl
    chatframe chat.txt --keep-media --basic-columns")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = "records.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep only records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep only records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep only records from this author
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Keep media placeholder rows instead of dropping them
    #[arg(long)]
    pub keep_media: bool,

    /// Write only the timestamp, author, and body columns
    #[arg(long)]
    pub basic_columns: bool,
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use chatframe::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// println!("Format: {}", format); // "JSONL"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(format: OutputFormat) -> crate::output::OutputFormat {
        match format {
            OutputFormat::Csv => crate::output::OutputFormat::Csv,
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Jsonl => crate::output::OutputFormat::Jsonl,
        }
    }
}
