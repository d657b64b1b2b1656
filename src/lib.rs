//! # Chatframe
//!
//! A Rust library for converting exported WhatsApp chat transcripts into a
//! structured, queryable record table.
//!
//! ## Overview
//!
//! WhatsApp exports arrive as plain text whose timestamp layout varies by
//! device region and OS version. Chatframe detects which of the known
//! layouts a transcript uses, splits the text into per-message segments,
//! normalizes every timestamp through a fallback chain, separates author
//! from body, and derives the temporal columns (date, month, weekday, hour
//! period) analysis code wants. System notifications are kept under a
//! sentinel author; media placeholders and empty bodies are dropped.
//!
//! The parse is all-or-nothing: a transcript with no recognizable timestamp
//! layout, or one timestamp no strategy can place, fails with a typed error
//! instead of producing a partial table.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatframe::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "12/25/23, 2:30 PM - Alice: Hey!\n12/25/23, 2:31 PM - Bob: Hello\n";
//!     let table = TranscriptParser::new().parse_str(text)?;
//!
//!     assert_eq!(table.len(), 2);
//!     assert_eq!(table.records()[0].day_name, "Monday");
//!     assert_eq!(table.records()[0].period, "14-15");
//!     Ok(())
//! }
//! ```
//!
//! Parsing a file runs upload validation first (size cap, `.txt` extension,
//! strict UTF-8):
//!
//! ```rust,no_run
//! use std::path::Path;
//! use chatframe::TranscriptParser;
//!
//! let table = TranscriptParser::new().parse(Path::new("chat.txt"))?;
//! # Ok::<(), chatframe::ChatframeError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`TranscriptParser`], the single entry point
//! - [`pattern`] — timestamp layout detection ([`pattern::TimestampPattern`])
//! - [`segment`] — splitting text into per-message segments
//! - [`timestamp`] — timestamp normalization with fallbacks
//! - [`extract`] — author/body separation and the notification sentinel
//! - [`record`] — [`Record`] with derived temporal fields
//! - [`table`] — [`TranscriptTable`], the ordered result set
//! - [`config`] — [`config::ParserConfig`]
//! - [`upload`] — file validation ([`upload::UploadPolicy`])
//! - [`filter`] — post-parse filtering by date range and author
//! - [`output`] — CSV/JSON/JSONL writers (feature-gated)
//! - [`cli`] — CLI types (feature-gated)
//! - [`error`] — unified error types ([`ChatframeError`], [`Result`])
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
#[cfg(any(feature = "csv-output", feature = "json-output"))]
pub mod output;
pub mod parser;
pub mod pattern;
pub mod record;
pub mod segment;
pub mod table;
pub mod timestamp;
pub mod upload;

// Re-export the main types at the crate root for convenience
pub use error::{ChatframeError, Result};
pub use parser::TranscriptParser;
pub use record::Record;
pub use table::TranscriptTable;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatframe::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{Record, TranscriptParser, TranscriptTable};

    // Error types
    pub use crate::error::{ChatframeError, Result};

    // Configuration
    pub use crate::config::ParserConfig;
    pub use crate::upload::UploadPolicy;

    // Pattern detection
    pub use crate::pattern::TimestampPattern;

    // Filtering
    pub use crate::filter::{apply_filters, FilterConfig};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
    #[cfg(any(feature = "csv-output", feature = "json-output"))]
    pub use crate::output::{write_to_format, OutputConfig, OutputFormat};
}
