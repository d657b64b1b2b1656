//! The finalized message row.
//!
//! [`Record`] is the unit of the transcript table: one fully-typed message
//! with its sender, body, absolute timestamp, and the derived temporal
//! fields downstream analysis queries (calendar date, weekday, hour bucket,
//! hour-range label). Derived fields are pure functions of the timestamp,
//! computed once at construction and never mutated afterwards.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// One finalized, fully-typed message row.
///
/// # Example
///
/// ```rust
/// use chatframe::Record;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2023, 12, 25, 14, 30, 0).unwrap();
/// let record = Record::new(ts, "Alice", "Hi");
///
/// assert_eq!(record.month, "December");
/// assert_eq!(record.day_name, "Monday");
/// assert_eq!(record.period, "14-15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Absolute instant the message was sent. Always present; a transcript
    /// with an unparseable timestamp never produces a table at all.
    pub timestamp: DateTime<Utc>,

    /// Sender identity as written in the transcript, or the
    /// [`group_notification`](crate::extract::GROUP_NOTIFICATION) sentinel.
    pub author: String,

    /// Message text with the author prefix stripped.
    pub body: String,

    /// Calendar date of the timestamp.
    pub date: NaiveDate,

    /// Year, e.g. `2023`.
    pub year: i32,

    /// Month number, 1–12.
    pub month_num: u32,

    /// English month name, e.g. `"December"`.
    pub month: String,

    /// Day of month, 1–31.
    pub day: u32,

    /// English weekday name, e.g. `"Monday"`.
    pub day_name: String,

    /// Hour of day, 0–23.
    pub hour: u32,

    /// Minute, 0–59.
    pub minute: u32,

    /// Hour-range label, e.g. `"14-15"`; see [`period_label`].
    pub period: String,
}

impl Record {
    /// Creates a record, deriving all temporal fields from `timestamp`.
    pub fn new(
        timestamp: DateTime<Utc>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let hour = timestamp.hour();
        Self {
            author: author.into(),
            body: body.into(),
            date: timestamp.date_naive(),
            year: timestamp.year(),
            month_num: timestamp.month(),
            month: timestamp.format("%B").to_string(),
            day: timestamp.day(),
            day_name: timestamp.format("%A").to_string(),
            hour,
            minute: timestamp.minute(),
            period: period_label(hour),
            timestamp,
        }
    }

    /// Returns `true` if this row is a system notification rather than a
    /// sender-attributed message.
    pub fn is_notification(&self) -> bool {
        self.author == crate::extract::GROUP_NOTIFICATION
    }
}

/// Hour-range label for an hour of day.
///
/// Wraparound cases follow the reference behavior exactly: hour 23 maps to
/// `"23-00"` and hour 0 to `"00-1"`; every other hour is `"H-H+1"`.
///
/// # Example
///
/// ```rust
/// use chatframe::record::period_label;
///
/// assert_eq!(period_label(14), "14-15");
/// assert_eq!(period_label(23), "23-00");
/// assert_eq!(period_label(0), "00-1");
/// ```
pub fn period_label(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}
