//! Filter records by date range and author.
//!
//! Downstream consumers scope analysis to one participant or a date window.
//! [`FilterConfig`] holds the criteria; [`apply_filters`] applies them with
//! AND semantics while preserving transcript order. The core parser never
//! filters by author or date itself.
//!
//! # Example
//!
//! ```rust
//! use chatframe::filter::{apply_filters, FilterConfig};
//! use chatframe::Record;
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> chatframe::Result<()> {
//! let records = vec![
//!     Record::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(), "Alice", "old"),
//!     Record::new(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(), "Alice", "new"),
//! ];
//!
//! let config = FilterConfig::new().with_date_from("2024-06-01")?;
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "new");
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{ChatframeError, Result};
use crate::record::Record;

/// Criteria for filtering records. Filters combine with AND logic; an empty
/// configuration passes everything through.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this instant.
    pub after: Option<DateTime<Utc>>,

    /// Include only records on or before this instant.
    pub before: Option<DateTime<Utc>>,

    /// Include only records from this author (ASCII case-insensitive).
    pub author: Option<String>,
}

impl FilterConfig {
    /// Creates an empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive start date (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_date_start(date_str)?);
        Ok(self)
    }

    /// Sets the inclusive end date (`YYYY-MM-DD`); the whole day is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_date_end(date_str)?);
        Ok(self)
    }

    /// Sets the author filter.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Returns `true` if any criterion is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.author.is_some()
    }

    /// Returns `true` if `record` passes every active criterion.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(after) = self.after {
            if record.timestamp < after {
                return false;
            }
        }
        if let Some(before) = self.before {
            if record.timestamp > before {
                return false;
            }
        }
        if let Some(ref author) = self.author {
            if !record.author.eq_ignore_ascii_case(author) {
                return false;
            }
        }
        true
    }
}

/// Filters records, preserving their order.
pub fn apply_filters(records: Vec<Record>, config: &FilterConfig) -> Vec<Record> {
    if !config.is_active() {
        return records;
    }
    records.into_iter().filter(|r| config.matches(r)).collect()
}

fn parse_ymd(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatframeError::invalid_date(date_str))
}

fn parse_date_start(date_str: &str) -> Result<DateTime<Utc>> {
    let date = parse_ymd(date_str)?;
    // Midnight is always valid for a calendar date.
    Ok(date.and_hms_opt(0, 0, 0).unwrap().and_utc())
}

fn parse_date_end(date_str: &str) -> Result<DateTime<Utc>> {
    let date = parse_ymd(date_str)?;
    Ok(date.and_hms_opt(23, 59, 59).unwrap().and_utc())
}
