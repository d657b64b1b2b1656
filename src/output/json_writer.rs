//! JSON array output.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::error::Result;
use crate::record::Record;

use super::{OutputConfig, TIMESTAMP_FORMAT};

/// The trimmed row shape used when derived columns are excluded.
#[derive(Serialize)]
pub(super) struct BasicRow<'a> {
    pub timestamp: String,
    pub author: &'a str,
    pub body: &'a str,
}

impl<'a> BasicRow<'a> {
    pub(super) fn from_record(record: &'a Record) -> Self {
        Self {
            timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            author: &record.author,
            body: &record.body,
        }
    }
}

/// Writes records to a file as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error on I/O or JSON serialization failure.
pub fn write_json(records: &[Record], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    if config.include_derived {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        let rows: Vec<BasicRow<'_>> = records.iter().map(BasicRow::from_record).collect();
        serde_json::to_writer_pretty(&mut writer, &rows)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Renders records as a pretty-printed JSON array string.
///
/// # Errors
///
/// Returns an error on JSON serialization failure.
pub fn to_json(records: &[Record], config: &OutputConfig) -> Result<String> {
    if config.include_derived {
        Ok(serde_json::to_string_pretty(records)?)
    } else {
        let rows: Vec<BasicRow<'_>> = records.iter().map(BasicRow::from_record).collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}
