//! Error types for editor configuration.
//!
//! Editing operations themselves are total: a stale id or out-of-range row
//! index degrades to a no-op and a log line, never an error.

use thiserror::Error;

/// Errors that can occur while loading an [`EditorConfig`](crate::EditorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config text is not valid RON for the config shape.
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// A value parsed but is outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}
