//! Unified error types for chatplot.
//!
//! This module provides a single [`ChatplotError`] enum covering every failure
//! the library can surface. Malformed chat lines are *not* errors: the parser
//! drops them silently. Errors only come from option parsing, unknown
//! participants, output writing, and the rendering collaborators (mask
//! loading, word-cloud and chart renderers), which propagate without retry.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatplot operations.
///
/// # Example
///
/// ```rust
/// use chatplot::error::Result;
/// use chatplot::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatplotError>;

/// The error type for all chatplot operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatplotError {
    /// An I/O error occurred.
    ///
    /// Typically raised by the CLI when the export, a stop-word file or an
    /// output file cannot be read or written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A time granularity name was not recognised.
    #[error("Invalid time period '{input}'. Expected one of: {expected}")]
    InvalidGranularity {
        /// The name that was provided
        input: String,
        /// Accepted names
        expected: &'static str,
    },

    /// An output or option value doesn't match any known variant.
    #[error("Invalid {kind}: {message}")]
    InvalidFormat {
        /// What was being parsed (e.g. "output", "mask")
        kind: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The requested participant is not part of the chat.
    #[error("Unknown participant '{0}'")]
    UnknownParticipant(String),

    /// The word-cloud mask image could not be loaded.
    #[error("Failed to load mask{}: {message}", path.as_ref().map(|p| format!(" '{}'", p.display())).unwrap_or_default())]
    Mask {
        /// Path of the mask, if known
        path: Option<PathBuf>,
        /// Description of the failure
        message: String,
    },

    /// A rendering collaborator failed.
    #[error("Render error: {0}")]
    Render(String),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatplotError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatplotError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatplotError {
    /// Creates an invalid granularity error.
    pub fn invalid_granularity(input: impl Into<String>) -> Self {
        ChatplotError::InvalidGranularity {
            input: input.into(),
            expected: "hour, day, month, year, progression",
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(kind: &'static str, message: impl Into<String>) -> Self {
        ChatplotError::InvalidFormat {
            kind,
            message: message.into(),
        }
    }

    /// Creates a mask loading error.
    pub fn mask(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        ChatplotError::Mask {
            path,
            message: message.into(),
        }
    }

    /// Creates a renderer error.
    pub fn render(message: impl Into<String>) -> Self {
        ChatplotError::Render(message.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatplotError::Io(_))
    }

    /// Returns `true` if this is an unknown participant error.
    pub fn is_unknown_participant(&self) -> bool {
        matches!(self, ChatplotError::UnknownParticipant(_))
    }

    /// Returns `true` if this error came from a rendering collaborator.
    pub fn is_collaborator(&self) -> bool {
        matches!(self, ChatplotError::Mask { .. } | ChatplotError::Render(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatplotError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_invalid_granularity_display() {
        let err = ChatplotError::invalid_granularity("week");
        let display = err.to_string();
        assert!(display.contains("week"));
        assert!(display.contains("progression"));
    }

    #[test]
    fn test_mask_error_with_path() {
        let err = ChatplotError::mask(Some(PathBuf::from("masks/cat.png")), "no such file");
        let display = err.to_string();
        assert!(display.contains("masks/cat.png"));
        assert!(display.contains("no such file"));
        assert!(err.is_collaborator());
    }

    #[test]
    fn test_mask_error_without_path() {
        let err = ChatplotError::mask(None, "empty image");
        assert!(!err.to_string().contains('\''));
    }

    #[test]
    fn test_unknown_participant() {
        let err = ChatplotError::UnknownParticipant("Zoe".into());
        assert!(err.is_unknown_participant());
        assert!(!err.is_io());
        assert!(err.to_string().contains("Zoe"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatplotError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatplotError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatplotError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
