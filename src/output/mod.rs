//! Record-set output.
//!
//! The finalized table is the contract with downstream analysis; these
//! writers externalize it as semicolon-delimited CSV, a JSON array, or
//! JSON Lines. Writers are feature-gated the same way their backing crates
//! are (`csv-output`, `json-output`).

use serde::{Deserialize, Serialize};

use crate::error::ChatframeError;

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Timestamp column format shared by all writers.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output format for the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default).
    #[default]
    Csv,

    /// JSON array of records.
    Json,

    /// JSON Lines, one record per line.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatframe::output::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("records.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatframeError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatframeError::invalid_output_format(format!(
                "unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                ext
            ))),
        }
    }
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

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Column selection for output writers.
///
/// The full column set carries every derived field; the basic set is the
/// `timestamp`, `author`, `body` trio downstream tools that derive their
/// own columns prefer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include derived temporal columns (default: true).
    pub include_derived: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_derived: true,
        }
    }
}

impl OutputConfig {
    /// Creates the default (full-column) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether derived temporal columns are written.
    #[must_use]
    pub fn with_derived(mut self, include: bool) -> Self {
        self.include_derived = include;
        self
    }
}

/// Writes records to a file in the specified format.
///
/// # Errors
///
/// Returns [`ChatframeError::InvalidOutputFormat`] when the requested
/// format's feature is not enabled, plus any I/O or serialization error.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[crate::Record],
    output_path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatframeError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => write_csv(records, output_path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => write_json(records, output_path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => write_jsonl(records, output_path, config),
        #[allow(unreachable_patterns)]
        other => Err(ChatframeError::invalid_output_format(format!(
            "{other} output is not enabled; enable the corresponding feature"
        ))),
    }
}
