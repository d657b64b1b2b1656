//! Parser configuration.
//!
//! [`ParserConfig`] controls the few knobs the transcript pipeline exposes.
//! Defaults reproduce the reference behavior: media placeholders and empty
//! bodies are dropped, and detection diagnostics carry up to 500 characters
//! of the input.
//!
//! # Example
//!
//! ```rust
//! use chatframe::config::ParserConfig;
//! use chatframe::TranscriptParser;
//!
//! let config = ParserConfig::new().with_keep_media(true);
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::extract::MEDIA_OMITTED;
use crate::pattern::DIAGNOSTIC_SNIPPET_LEN;

/// Configuration for transcript parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Keep rows whose body is the media placeholder (default: false).
    pub keep_media: bool,

    /// The placeholder body that marks omitted media
    /// (default: `"<Media omitted>"`).
    pub media_placeholder: String,

    /// Maximum characters of input included in detection diagnostics
    /// (default: 500).
    pub snippet_limit: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            keep_media: false,
            media_placeholder: MEDIA_OMITTED.to_string(),
            snippet_limit: DIAGNOSTIC_SNIPPET_LEN,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether media placeholder rows are kept in the table.
    #[must_use]
    pub fn with_keep_media(mut self, keep: bool) -> Self {
        self.keep_media = keep;
        self
    }

    /// Overrides the media placeholder body (localized exports use
    /// different text).
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the diagnostic snippet length.
    #[must_use]
    pub fn with_snippet_limit(mut self, limit: usize) -> Self {
        self.snippet_limit = limit;
        self
    }
}
