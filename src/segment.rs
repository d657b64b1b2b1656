//! Transcript segmentation.
//!
//! Splits the raw transcript on every occurrence of the selected timestamp
//! layout, pairing each matched timestamp with the text that runs up to the
//! next match. Matching is non-overlapping and covers the entire text, so
//! every message is captured; anything before the first match is export
//! header boilerplate and is dropped.

use crate::error::{ChatframeError, Result};
use crate::pattern::TimestampPattern;

/// One (timestamp, remainder) slice of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The matched timestamp text, trailing separator included.
    pub raw_timestamp: String,
    /// Everything between this match and the next (or end of input).
    /// May span multiple lines for multiline messages.
    pub remainder: String,
}

/// Splits `text` into segments using the selected pattern.
///
/// Invariant: the returned length equals the number of pattern matches in the
/// text, and concatenating `raw_timestamp + remainder` over all segments
/// reconstructs the transcript minus the pre-first-match prefix.
///
/// # Errors
///
/// Returns [`ChatframeError::EmptyTranscript`] if the pattern never matches.
///
/// # Example
///
/// ```rust
/// use chatframe::pattern::TimestampPattern;
/// use chatframe::segment::split_segments;
///
/// let text = "12/25/23, 2:30 PM - Alice: Hi\n12/25/23, 2:31 PM - Bob: Hello\n";
/// let pattern = TimestampPattern::detect(text).unwrap();
/// let segments = split_segments(text, pattern).unwrap();
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].remainder, "Alice: Hi\n");
/// ```
pub fn split_segments(text: &str, pattern: TimestampPattern) -> Result<Vec<Segment>> {
    let regex = pattern.regex();

    let matches: Vec<(usize, usize)> = regex
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    if matches.is_empty() {
        return Err(ChatframeError::EmptyTranscript);
    }

    let mut segments = Vec::with_capacity(matches.len());
    for (i, &(start, end)) in matches.iter().enumerate() {
        let remainder_end = matches.get(i + 1).map_or(text.len(), |&(next, _)| next);
        segments.push(Segment {
            raw_timestamp: text[start..end].to_string(),
            remainder: text[end..remainder_end].to_string(),
        });
    }

    Ok(segments)
}
