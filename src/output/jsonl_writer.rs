//! JSON Lines output, one record per line.
//!
//! Suited for streaming consumers and line-oriented tooling (`jq`, log
//! pipelines) that never want to hold the whole array.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::record::Record;

use super::json_writer::BasicRow;
use super::OutputConfig;

/// Writes records to a file in JSON Lines format.
///
/// # Errors
///
/// Returns an error on I/O or JSON serialization failure.
pub fn write_jsonl(records: &[Record], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = serialize_line(record, config)?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders records as a JSON Lines string.
///
/// # Errors
///
/// Returns an error on JSON serialization failure.
pub fn to_jsonl(records: &[Record], config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serialize_line(record, config)?);
        out.push('\n');
    }
    Ok(out)
}

fn serialize_line(record: &Record, config: &OutputConfig) -> Result<String> {
    if config.include_derived {
        Ok(serde_json::to_string(record)?)
    } else {
        Ok(serde_json::to_string(&BasicRow::from_record(record))?)
    }
}
