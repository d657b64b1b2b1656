//! Unified error types for chatframe.
//!
//! This module provides a single [`ChatframeError`] enum that covers all error
//! cases in the library. Parser failures are always returned as values, never
//! panicked across the library boundary, so callers can render a user-facing
//! message without inspecting internals.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatframe operations.
///
/// # Example
///
/// ```rust
/// use chatframe::error::Result;
/// use chatframe::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatframeError>;

/// The error type for all chatframe operations.
///
/// The parse-fatal variants mirror the failure modes of the transcript
/// pipeline: no recognizable timestamp layout, a blank input, a timestamp
/// that survives no fallback strategy, and a table that is empty after
/// placeholder filtering. The remaining variants cover upload validation,
/// record filtering, and output writing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatframeError {
    /// An I/O error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No known timestamp layout matches anywhere in the transcript.
    ///
    /// Carries the head of the input so the caller can show what the file
    /// actually looks like.
    #[error("no valid timestamp pattern found in transcript; first characters: {snippet:?}")]
    NoTimestampPattern {
        /// Leading characters of the transcript (~500 chars) for diagnosis.
        snippet: String,
    },

    /// The input was blank or produced zero segments.
    #[error("transcript is empty or contains no messages")]
    EmptyTranscript,

    /// Every fallback strategy failed for one raw timestamp.
    ///
    /// This aborts the whole parse rather than dropping the row; the raw
    /// matched text identifies the offending line.
    #[error("could not parse timestamp {raw:?} with any known format")]
    TimestampParseExhausted {
        /// The raw timestamp text as matched in the transcript.
        raw: String,
    },

    /// All candidate rows were filtered out (e.g. the whole transcript was
    /// media placeholders). Distinct from [`EmptyTranscript`](Self::EmptyTranscript):
    /// segments existed, but nothing survived.
    #[error("no records remain after filtering placeholder and empty messages")]
    EmptyResultSet,

    /// The uploaded file exceeds the configured size limit.
    #[error("file too large: {actual_size} bytes (maximum: {max_size} bytes)")]
    FileTooLarge {
        /// Maximum allowed size in bytes.
        max_size: u64,
        /// Actual size encountered.
        actual_size: u64,
    },

    /// The uploaded file does not carry the expected extension.
    #[error("unsupported file type {path:?}: expected a .{expected} export")]
    UnsupportedExtension {
        /// The rejected path.
        path: PathBuf,
        /// Required extension (without dot).
        expected: String,
    },

    /// File content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred.
        context: String,
        /// The underlying UTF-8 error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid date in filter configuration. Filters expect `YYYY-MM-DD`.
    #[error("invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided.
        input: String,
        /// Expected format description.
        expected: &'static str,
    },

    /// Unknown output format or file extension.
    #[error("invalid output format: {message}")]
    InvalidOutputFormat {
        /// Description of what's wrong.
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatframeError {
    /// Creates a [`NoTimestampPattern`](Self::NoTimestampPattern) error,
    /// truncating the transcript head to at most `limit` characters.
    pub fn no_timestamp_pattern(text: &str, limit: usize) -> Self {
        ChatframeError::NoTimestampPattern {
            snippet: text.chars().take(limit).collect(),
        }
    }

    /// Creates a [`TimestampParseExhausted`](Self::TimestampParseExhausted) error.
    pub fn timestamp_exhausted(raw: impl Into<String>) -> Self {
        ChatframeError::TimestampParseExhausted { raw: raw.into() }
    }

    /// Creates an invalid date error for filter configuration.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatframeError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid output format error.
    pub fn invalid_output_format(message: impl Into<String>) -> Self {
        ChatframeError::InvalidOutputFormat {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatframeError::Io(_))
    }

    /// Returns `true` if this error is fatal to a parse invocation
    /// (as opposed to upload validation or output writing).
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ChatframeError::NoTimestampPattern { .. }
                | ChatframeError::EmptyTranscript
                | ChatframeError::TimestampParseExhausted { .. }
                | ChatframeError::EmptyResultSet
        )
    }

    /// Returns `true` if this error was raised by upload validation.
    pub fn is_upload(&self) -> bool {
        matches!(
            self,
            ChatframeError::FileTooLarge { .. }
                | ChatframeError::UnsupportedExtension { .. }
                | ChatframeError::Utf8 { .. }
        )
    }

    /// Returns `true` if this is a date-related filter error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatframeError::InvalidDate { .. })
    }
}

impl From<std::string::FromUtf8Error> for ChatframeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatframeError::Utf8 {
            context: "transcript decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
