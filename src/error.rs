//! Unified error types for chatscope.
//!
//! This module provides a single [`ChatscopeError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **The core pipeline raises nothing**: once an export has passed the
//!   ingestion boundary, every pipeline operation is total. All error
//!   variants here belong to the boundary (file I/O, JSON shape, CSV output).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatscope operations.
///
/// # Example
///
/// ```rust
/// use chatscope::error::Result;
/// use chatscope::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscopeError>;

/// The error type for all chatscope operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscopeError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing an export)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse the Telegram JSON export.
    ///
    /// Contains the underlying JSON error and optionally the file path.
    #[error("Failed to parse Telegram export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The underlying JSON parse error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The export doesn't match the expected structure.
    ///
    /// This occurs when:
    /// - The top-level `messages` array is missing
    /// - A message record is missing `id`, `date_unixtime` or `text_entities`
    /// - A `date_unixtime` value is not a valid Unix timestamp
    #[error("Invalid Telegram export: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    ///
    /// This can occur when writing the summary or message exports.
    #[cfg(feature = "csv-export")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    ///
    /// This can occur when printing a report as JSON.
    #[error("JSON error: {0}")]
    Json(#[source] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when converting an in-memory export buffer to a string.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatscopeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatscopeError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatscopeError {
    /// Creates a parse error for the Telegram export format.
    pub fn parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatscopeError::Parse { source, path }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatscopeError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatscopeError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatscopeError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatscopeError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
