//! Semicolon-delimited CSV output.
//!
//! Message bodies routinely contain commas, so the delimiter is `;` and the
//! `csv` crate handles quoting. The timestamp column uses the shared
//! `YYYY-MM-DD HH:MM:SS` rendering.

use std::fs::File;

use crate::error::Result;
use crate::record::Record;

use super::{OutputConfig, TIMESTAMP_FORMAT};

const FULL_HEADER: &[&str] = &[
    "timestamp",
    "author",
    "body",
    "date",
    "year",
    "month_num",
    "month",
    "day",
    "day_name",
    "hour",
    "minute",
    "period",
];

const BASIC_HEADER: &[&str] = &["timestamp", "author", "body"];

/// Writes records to a CSV file.
///
/// # Errors
///
/// Returns an error on I/O or CSV serialization failure.
pub fn write_csv(records: &[Record], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_rows(&mut writer, records, config)?;
    writer.flush()?;
    Ok(())
}

/// Renders records as a CSV string.
///
/// # Errors
///
/// Returns an error on CSV serialization failure.
pub fn to_csv(records: &[Record], config: &OutputConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_rows(&mut writer, records, config)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[Record],
    config: &OutputConfig,
) -> Result<()> {
    let header = if config.include_derived {
        FULL_HEADER
    } else {
        BASIC_HEADER
    };
    writer.write_record(header)?;

    for record in records {
        let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
        if config.include_derived {
            writer.write_record([
                timestamp,
                record.author.clone(),
                record.body.clone(),
                record.date.to_string(),
                record.year.to_string(),
                record.month_num.to_string(),
                record.month.clone(),
                record.day.to_string(),
                record.day_name.clone(),
                record.hour.to_string(),
                record.minute.to_string(),
                record.period.clone(),
            ])?;
        } else {
            writer.write_record([timestamp, record.author.clone(), record.body.clone()])?;
        }
    }
    Ok(())
}
