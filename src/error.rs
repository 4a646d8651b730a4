//! Unified error types for chatlens.
//!
//! The parsing and aggregation core is total: malformed lines are dropped,
//! empty inputs yield empty results, and unknown scope users produce empty
//! tables. Errors only arise at the I/O and decoding boundary, so this
//! module stays small.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatLensError>;

/// The error type for all chatlens operations.
///
/// Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatLensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the input file doesn't exist or cannot
    /// be read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when the supplied export bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error.
    ///
    /// Can occur when the CLI renders result tables as JSON.
    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatLensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatLensError::Utf8 {
            context: "chat export".to_string(),
            source: err,
        }
    }
}

impl ChatLensError {
    /// Creates a UTF-8 error with explicit context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatLensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatLensError::Io(_))
    }

    /// Returns `true` if this is a UTF-8 decoding error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatLensError::Utf8 { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatLensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_utf8_error_display() {
        let invalid_bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err = ChatLensError::utf8("reading export", utf8_err);
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("reading export"));
    }

    #[test]
    fn test_from_utf8_error_default_context() {
        let utf8_err = String::from_utf8(vec![0xff]).unwrap_err();
        let err: ChatLensError = utf8_err.into();
        assert!(err.is_utf8());
        assert!(err.to_string().contains("chat export"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatLensError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatLensError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_utf8());

        let utf8_err = String::from_utf8(vec![0xff]).unwrap_err();
        let err = ChatLensError::utf8("test", utf8_err);
        assert!(err.is_utf8());
        assert!(!err.is_io());
    }

    #[test]
    fn test_error_debug() {
        let io_err = ChatLensError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        let debug = format!("{:?}", io_err);
        assert!(debug.contains("Io"));
    }
}
