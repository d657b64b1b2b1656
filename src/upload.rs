//! Upload validation.
//!
//! Exports arrive as user-provided files; before the core parser sees any
//! text the file is checked against an [`UploadPolicy`] (size cap, `.txt`
//! extension) and decoded strictly as UTF-8. Rejections are typed errors so
//! the caller can tell the user exactly what was wrong with the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatframeError, Result};

/// Validation policy for uploaded transcript files.
///
/// # Example
///
/// ```rust
/// use chatframe::upload::UploadPolicy;
///
/// let policy = UploadPolicy::new().with_max_file_size(10 * 1024 * 1024);
/// assert_eq!(policy.max_file_size, 10 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPolicy {
    /// Maximum accepted file size in bytes (default: 200 MB).
    pub max_file_size: u64,

    /// Required file extension, without dot (default: `"txt"`).
    pub extension: String,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size: 200 * 1024 * 1024, // 200MB
            extension: "txt".to_string(),
        }
    }
}

impl UploadPolicy {
    /// Creates a policy with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum accepted file size in bytes.
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Validates a path against this policy without reading the content.
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::UnsupportedExtension`] or
    /// [`ChatframeError::FileTooLarge`]; I/O failures (missing file,
    /// permissions) surface as [`ChatframeError::Io`].
    pub fn validate(&self, path: &Path) -> Result<()> {
        let extension_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension));
        if !extension_ok {
            return Err(ChatframeError::UnsupportedExtension {
                path: path.to_path_buf(),
                expected: self.extension.clone(),
            });
        }

        let actual_size = fs::metadata(path)?.len();
        if actual_size > self.max_file_size {
            return Err(ChatframeError::FileTooLarge {
                max_size: self.max_file_size,
                actual_size,
            });
        }

        Ok(())
    }
}

/// Validates and reads a transcript file as UTF-8 text.
///
/// # Errors
///
/// Policy violations as in [`UploadPolicy::validate`]; non-UTF-8 content is
/// [`ChatframeError::Utf8`].
pub fn read_transcript(path: &Path, policy: &UploadPolicy) -> Result<String> {
    policy.validate(path)?;

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|source| ChatframeError::Utf8 {
        context: format!("reading {}", path.display()),
        source,
    })
}
