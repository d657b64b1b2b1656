//! The transcript parser.
//!
//! [`TranscriptParser`] is the single entry point of the crate: detect the
//! timestamp layout, segment the text, normalize each timestamp, split
//! author from body, derive temporal fields, and hand back the finalized
//! [`TranscriptTable`]. The whole parse runs synchronously in one call; the
//! input is read-only and the output table is freshly allocated per
//! invocation.
//!
//! # Example
//!
//! ```rust
//! use chatframe::TranscriptParser;
//!
//! let text = "12/25/23, 2:30 PM - Alice: Hi\n12/25/23, 2:31 PM - Bob: Hello\n";
//! let table = TranscriptParser::new().parse_str(text).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.records()[0].author, "Alice");
//! assert_eq!(table.records()[0].hour, 14);
//! ```

use std::path::Path;

use crate::config::ParserConfig;
use crate::error::{ChatframeError, Result};
use crate::extract::split_author;
use crate::pattern::TimestampPattern;
use crate::record::Record;
use crate::segment::split_segments;
use crate::table::TranscriptTable;
use crate::timestamp::normalize_timestamp;
use crate::upload::{read_transcript, UploadPolicy};

/// Parses WhatsApp-style chat exports into a [`TranscriptTable`].
pub struct TranscriptParser {
    config: ParserConfig,
    upload_policy: UploadPolicy,
}

impl TranscriptParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
            upload_policy: UploadPolicy::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            upload_policy: UploadPolicy::default(),
        }
    }

    /// Sets the upload policy used by [`parse`](Self::parse).
    #[must_use]
    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Validates, reads, and parses a transcript file.
    ///
    /// Upload validation (extension, size cap, UTF-8 decode) runs before
    /// the core parse; see [`UploadPolicy`].
    pub fn parse(&self, path: &Path) -> Result<TranscriptTable> {
        let text = read_transcript(path, &self.upload_policy)?;
        self.parse_str(&text)
    }

    /// Parses transcript text already in memory.
    ///
    /// # Errors
    ///
    /// All failures are fatal to the parse; no partial table is produced:
    ///
    /// - [`ChatframeError::EmptyTranscript`] for blank input or zero
    ///   segments;
    /// - [`ChatframeError::NoTimestampPattern`] when no known layout
    ///   matches;
    /// - [`ChatframeError::TimestampParseExhausted`] when one timestamp
    ///   defeats every fallback strategy;
    /// - [`ChatframeError::EmptyResultSet`] when all rows were filtered
    ///   out (placeholders and empty bodies).
    pub fn parse_str(&self, text: &str) -> Result<TranscriptTable> {
        if text.trim().is_empty() {
            return Err(ChatframeError::EmptyTranscript);
        }

        let pattern = TimestampPattern::detect_with_limit(text, self.config.snippet_limit)?;
        let segments = split_segments(text, pattern)?;

        let mut records = Vec::with_capacity(segments.len());
        for segment in &segments {
            let timestamp = normalize_timestamp(&segment.raw_timestamp, pattern)?;
            let entry = split_author(&segment.remainder);

            if entry.body.is_empty() {
                continue;
            }
            if !self.config.keep_media && entry.body == self.config.media_placeholder {
                continue;
            }

            records.push(Record::new(timestamp, entry.author, entry.body));
        }

        if records.is_empty() {
            return Err(ChatframeError::EmptyResultSet);
        }

        Ok(TranscriptTable::new(records))
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}
