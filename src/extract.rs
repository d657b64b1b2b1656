//! Author/body extraction.
//!
//! Splits a segment's remainder into the sender identity and the message
//! body. Rules are tried in order:
//!
//! 1. shortest colon-terminated prefix followed by whitespace
//!    (`Alice: hello`);
//! 2. the same without whitespace after the colon (`Alice:hello`);
//! 3. a hyphen-delimited variant (`Alice - hello`).
//!
//! When no rule matches, the line is a system notification with no sender
//! and the whole remainder becomes the body under the
//! [`GROUP_NOTIFICATION`] sentinel.

use std::sync::LazyLock;

use regex::Regex;

/// Sentinel author for system/administrative lines with no identifiable
/// sender ("Messages are end-to-end encrypted", subject changes, etc.).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Author/body rules, tried in order. Compiled once; `split_author` runs
/// per segment.
///
/// The hyphen rule requires whitespace after the hyphen. A bare `-\s*`
/// would capture hyphenated words in notification lines ("end-to-end
/// encrypted" would gain the author "Messages and calls are end"), so
/// names like `Alice-hi` without a delimiter stay under the sentinel.
static AUTHOR_RULES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    // (?s) lets bodies span lines; the prefix classes exclude the delimiter
    // so matching never runs past the first boundary.
    [
        Regex::new(r"(?s)^([^:]+):\s(.*)$").unwrap(),
        Regex::new(r"(?s)^([^:]+):(.*)$").unwrap(),
        Regex::new(r"(?s)^([^-]+)-\s(.*)$").unwrap(),
    ]
});

/// Literal body WhatsApp substitutes when media is excluded from an export.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Author and body split out of one segment remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authored {
    /// Sender as written in the transcript, or [`GROUP_NOTIFICATION`].
    pub author: String,
    /// Message text with the author prefix stripped, trimmed.
    pub body: String,
}

/// Splits a remainder into author and body.
///
/// Pure function; the prefix in rules 1 and 2 may not itself contain a
/// colon, so the first colon boundary always wins. Bodies keep interior
/// newlines (multiline messages) and are trimmed at both ends.
///
/// # Example
///
/// ```rust
/// use chatframe::extract::{split_author, GROUP_NOTIFICATION};
///
/// let entry = split_author("Alice: hello there");
/// assert_eq!(entry.author, "Alice");
/// assert_eq!(entry.body, "hello there");
///
/// let note = split_author("Meeting starts now");
/// assert_eq!(note.author, GROUP_NOTIFICATION);
/// assert_eq!(note.body, "Meeting starts now");
/// ```
pub fn split_author(remainder: &str) -> Authored {
    let trimmed = remainder.trim();

    for regex in AUTHOR_RULES.iter() {
        if let Some(caps) = regex.captures(trimmed) {
            let author = caps.get(1).map_or("", |m| m.as_str()).trim();
            let body = caps.get(2).map_or("", |m| m.as_str()).trim();
            if !author.is_empty() {
                return Authored {
                    author: author.to_string(),
                    body: body.to_string(),
                };
            }
        }
    }

    Authored {
        author: GROUP_NOTIFICATION.to_string(),
        body: trimmed.to_string(),
    }
}
