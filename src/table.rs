//! The finalized transcript table.
//!
//! An ordered sequence of [`Record`]s built once per parse invocation and
//! handed whole to downstream analysis. The parser never re-sorts it;
//! records keep transcript order. A reparse discards the old table entirely.

use crate::error::{ChatframeError, Result};
use crate::record::Record;

/// Ordered record set produced by one parse invocation.
///
/// # Example
///
/// ```rust
/// use chatframe::TranscriptParser;
///
/// let text = "12/25/23, 2:30 PM - Alice: Hi\n12/25/23, 2:31 PM - Bob: Hello\n";
/// let table = TranscriptParser::new().parse_str(text).unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.authors(), vec!["Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptTable {
    records: Vec<Record>,
}

impl TranscriptTable {
    /// Wraps finalized records into a table. Order is preserved as given.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the records in transcript order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the table, returning the owned records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct authors in first-appearance order.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.author.as_str()) {
                seen.push(&record.author);
            }
        }
        seen
    }

    /// Checks the column-presence contract downstream consumers rely on:
    /// the table must be non-empty and carry at least one distinct author.
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::EmptyResultSet`] when the contract fails.
    pub fn validate(&self) -> Result<()> {
        if self.records.is_empty() || self.authors().is_empty() {
            return Err(ChatframeError::EmptyResultSet);
        }
        Ok(())
    }

    /// Iterates over records in transcript order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl IntoIterator for TranscriptTable {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a TranscriptTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
