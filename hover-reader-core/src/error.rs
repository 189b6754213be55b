//! Error types for the reader core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the loader, settings and state adapters
///
/// None of these are fatal: the session recovers from each of them and
/// reports the message to the operator instead.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// Reading or writing a file failed
    #[error("{path}: {source}")]
    Io {
        /// The file that could not be accessed
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("{path}: invalid UTF-8 at byte {position}")]
    Encoding {
        /// The file that failed to decode
        path: PathBuf,
        /// Byte offset of the first invalid sequence
        position: usize,
    },

    /// Settings file could not be parsed
    #[error("settings error in {path}: {reason}")]
    SettingsParse {
        /// The settings file path
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Settings could not be serialized
    #[error("failed to write settings: {0}")]
    SettingsWrite(String),

    /// Persisted state could not be parsed
    #[error("state error in {path}: {reason}")]
    StateParse {
        /// The state file path
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Persisted state could not be serialized
    #[error("failed to write state: {0}")]
    StateWrite(#[from] serde_json::Error),

    /// Only plain-text files can be selected as a source
    #[error("unsupported file type: {0} (expected a .txt file)")]
    UnsupportedFile(PathBuf),
}

impl ReaderError {
    /// Wrap an I/O error together with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReaderError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Rejected operator input
///
/// The `Display` text is the re-prompt message shown to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Lines-per-page entry was not a positive integer
    #[error("Please enter a number greater than 0")]
    LinesPerPage,

    /// Page entry was outside `1..=max`
    #[error("Please enter a number between 1 and {max}")]
    PageOutOfRange {
        /// Current page count
        max: usize,
    },
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReaderError>;
