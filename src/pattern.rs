//! Timestamp layout detection.
//!
//! WhatsApp exports vary by locale and platform. This module defines the
//! closed set of recognized timestamp layouts and picks one for a transcript.
//!
//! Selection is priority-based, not coverage-based: patterns are tried in a
//! fixed order and the first one that matches *anywhere* in the text wins,
//! even if a later pattern would match more lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ChatframeError, Result};

/// Maximum number of leading characters included in detection diagnostics.
pub const DIAGNOSTIC_SNIPPET_LEN: usize = 500;

/// Boundary regexes compiled once, indexed in priority order. Detection and
/// segmentation both go through [`TimestampPattern::regex`], so a parse
/// never compiles a matcher twice.
static COMPILED_MATCHERS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(TimestampPattern::MonthFirstAmPm.matcher()).unwrap(),
        Regex::new(TimestampPattern::DayFirstFourDigitYear.matcher()).unwrap(),
        Regex::new(TimestampPattern::IsoDate.matcher()).unwrap(),
        Regex::new(TimestampPattern::MonthFirst24Hour.matcher()).unwrap(),
    ]
});

/// Recognized timestamp layouts, in priority order.
///
/// Each layout pairs a regex that finds a timestamp-prefixed message boundary
/// with the chrono format string that parses the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPattern {
    /// Month-first, 12-hour clock: `12/25/23, 2:30 PM - `
    MonthFirstAmPm,
    /// Day-first with 4-digit year, 24-hour clock: `25/12/2023, 14:30 - `
    DayFirstFourDigitYear,
    /// ISO date, 24-hour clock: `2023-12-25, 14:30 - `
    IsoDate,
    /// Month-first, 24-hour clock, 2–4 digit year: `12/25/23, 14:30 - `
    MonthFirst24Hour,
}

impl TimestampPattern {
    /// Returns the regex that finds this layout's message boundaries.
    ///
    /// The match includes the trailing ` - ` separator, so segment remainders
    /// start directly at the author/body text.
    pub fn matcher(self) -> &'static str {
        match self {
            // 12/25/23, 2:30 PM -
            TimestampPattern::MonthFirstAmPm => {
                r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s[AP]M\s-\s"
            }
            // 25/12/2023, 14:30 -
            TimestampPattern::DayFirstFourDigitYear => r"\d{1,2}/\d{1,2}/\d{4},\s\d{1,2}:\d{2}\s-\s",
            // 2023-12-25, 14:30 -
            TimestampPattern::IsoDate => r"\d{4}-\d{1,2}-\d{1,2},\s\d{1,2}:\d{2}\s-\s",
            // 12/25/23, 14:30 -
            TimestampPattern::MonthFirst24Hour => r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s-\s",
        }
    }

    /// Returns the chrono format string for the raw matched text.
    ///
    /// Applied verbatim to the match, trailing separator included. When the
    /// match deviates from this format (4-digit year under a `%y` layout,
    /// for instance) the normalizer's fallback chain takes over.
    pub fn parse_format(self) -> &'static str {
        match self {
            TimestampPattern::MonthFirstAmPm => "%m/%d/%y, %I:%M %p - ",
            TimestampPattern::DayFirstFourDigitYear => "%d/%m/%Y, %H:%M - ",
            TimestampPattern::IsoDate => "%Y-%m-%d, %H:%M - ",
            TimestampPattern::MonthFirst24Hour => "%m/%d/%y, %H:%M - ",
        }
    }

    /// Returns the compiled boundary regex for this layout.
    pub fn regex(self) -> &'static Regex {
        let index = match self {
            TimestampPattern::MonthFirstAmPm => 0,
            TimestampPattern::DayFirstFourDigitYear => 1,
            TimestampPattern::IsoDate => 2,
            TimestampPattern::MonthFirst24Hour => 3,
        };
        &COMPILED_MATCHERS[index]
    }

    /// Returns all layouts in priority order.
    pub fn all() -> &'static [TimestampPattern] {
        &[
            TimestampPattern::MonthFirstAmPm,
            TimestampPattern::DayFirstFourDigitYear,
            TimestampPattern::IsoDate,
            TimestampPattern::MonthFirst24Hour,
        ]
    }

    /// Picks the highest-priority layout that matches anywhere in `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::NoTimestampPattern`] with a leading snippet
    /// of the input when no layout matches. This is fatal to a parse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatframe::pattern::TimestampPattern;
    ///
    /// let text = "12/25/23, 2:30 PM - Alice: Hi\n";
    /// let pattern = TimestampPattern::detect(text).unwrap();
    /// assert_eq!(pattern, TimestampPattern::MonthFirstAmPm);
    /// ```
    pub fn detect(text: &str) -> Result<Self> {
        Self::detect_with_limit(text, DIAGNOSTIC_SNIPPET_LEN)
    }

    /// Like [`detect`](Self::detect), with a custom diagnostic snippet length.
    pub fn detect_with_limit(text: &str, snippet_limit: usize) -> Result<Self> {
        for pattern in Self::all() {
            if pattern.regex().is_match(text) {
                return Ok(*pattern);
            }
        }
        Err(ChatframeError::no_timestamp_pattern(text, snippet_limit))
    }
}

impl std::fmt::Display for TimestampPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampPattern::MonthFirstAmPm => write!(f, "MM/DD/YY, h:MM AM/PM"),
            TimestampPattern::DayFirstFourDigitYear => write!(f, "DD/MM/YYYY, HH:MM"),
            TimestampPattern::IsoDate => write!(f, "YYYY-MM-DD, HH:MM"),
            TimestampPattern::MonthFirst24Hour => write!(f, "MM/DD/YY, HH:MM"),
        }
    }
}
