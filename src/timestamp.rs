//! Timestamp normalization.
//!
//! Converts the raw timestamp text of a segment into an absolute instant.
//! The format selected by detection is applied verbatim first; real exports
//! drift from their own layout (4-digit years under a 2-digit layout,
//! stray AM/PM suffixes), so three progressively looser strategies follow.
//!
//! Fallback chain, first success wins:
//!
//! 1. The detected pattern's format, applied to the raw match as-is
//!    (trailing separator included).
//! 2. Trailing separator characters stripped, parsed month-first
//!    (`%m/%d/%y, %H:%M`).
//! 3. Same stripped text, parsed day-first (`%d/%m/%y, %H:%M`).
//! 4. A permissive free parse with an explicit day-first disambiguation
//!    rule (see [`normalize_timestamp`]).
//!
//! Exhausting all four is fatal to the whole parse, not just the row.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::{ChatframeError, Result};
use crate::pattern::TimestampPattern;

/// Fixed formats tried against the separator-stripped text (steps 2 and 3).
const STRIPPED_FORMATS: &[&str] = &["%m/%d/%y, %H:%M", "%d/%m/%y, %H:%M"];

/// Field splitter for the free parse: `/`, `-` or `.` separated date,
/// optional seconds, optional AM/PM. Compiled once.
static FREE_PARSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{1,4})[/\-.](\d{1,2})[/\-.](\d{1,4}),?\s+(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*([AaPp])[Mm])?$",
    )
    .unwrap()
});

/// Normalizes one raw timestamp into an absolute instant.
///
/// The free-parse step (4) accepts `/`, `-` or `.` separators, 2- or 4-digit
/// years, optional seconds, and an optional AM/PM suffix. Day/month
/// disambiguation is explicit rather than library-lenient:
///
/// - a leading 4-digit (or > 31) field selects the year-first reading;
/// - otherwise the day-first reading is preferred, and the fields are
///   swapped only when day-first yields no valid calendar date
///   (e.g. `06/13/25`, where 13 cannot be a month).
///
/// # Errors
///
/// Returns [`ChatframeError::TimestampParseExhausted`] when every strategy
/// fails.
///
/// # Example
///
/// ```rust
/// use chatframe::pattern::TimestampPattern;
/// use chatframe::timestamp::normalize_timestamp;
/// use chrono::Timelike;
///
/// let ts = normalize_timestamp("12/25/23, 2:30 PM - ", TimestampPattern::MonthFirstAmPm).unwrap();
/// assert_eq!(ts.hour(), 14);
/// ```
pub fn normalize_timestamp(raw: &str, pattern: TimestampPattern) -> Result<DateTime<Utc>> {
    // Step 1: the detected format, verbatim.
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern.parse_format()) {
        return Ok(naive.and_utc());
    }

    // Steps 2 and 3: fixed formats against the stripped text.
    let stripped = raw.trim_end_matches(|c: char| c == '-' || c.is_whitespace());
    for format in STRIPPED_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(stripped, format) {
            return Ok(naive.and_utc());
        }
    }

    // Step 4: permissive free parse.
    free_parse(stripped)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ChatframeError::timestamp_exhausted(raw))
}

/// Permissive parse of `date, time` text with explicit day-first preference.
fn free_parse(text: &str) -> Option<NaiveDateTime> {
    let caps = FREE_PARSE_RE.captures(text)?;

    let first_text = caps.get(1)?.as_str();
    let first: u32 = first_text.parse().ok()?;
    let second: u32 = caps.get(2)?.as_str().parse().ok()?;
    let third_text = caps.get(3)?.as_str();
    let third: u32 = third_text.parse().ok()?;

    let date = if first_text.len() == 4 || first > 31 {
        // Year-first reading: YYYY-MM-DD.
        NaiveDate::from_ymd_opt(first as i32, second, third)?
    } else {
        let year = expand_year(third_text, third)?;
        // Day-first preferred; swap only when day-first is impossible.
        NaiveDate::from_ymd_opt(year, second, first)
            .or_else(|| NaiveDate::from_ymd_opt(year, first, second))?
    };

    let mut hour: u32 = caps.get(4)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(5)?.as_str().parse().ok()?;
    let second_of_minute: u32 = caps
        .get(6)
        .map_or(Some(0), |m| m.as_str().parse().ok())?;

    if let Some(meridiem) = caps.get(7) {
        match meridiem.as_str() {
            "P" | "p" if hour < 12 => hour += 12,
            "A" | "a" if hour == 12 => hour = 0,
            _ => {}
        }
    }

    date.and_hms_opt(hour, minute, second_of_minute)
}

/// Expands a 2-digit year using the usual pivot: 00–68 map to 20xx,
/// 69–99 to 19xx. 4-digit years pass through.
fn expand_year(text: &str, value: u32) -> Option<i32> {
    match text.len() {
        4 => Some(value as i32),
        1 | 2 => {
            if value <= 68 {
                Some(2000 + value as i32)
            } else {
                Some(1900 + value as i32)
            }
        }
        _ => None,
    }
}
