//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Hovered document not found or unreadable
    FileNotFound(String),
    /// Unrecognized host event line
    InvalidEvent(String),
    /// Settings or state locations could not be determined
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidEvent(line) => write!(f, "Invalid event: {line}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("notes.txt".to_string());
        assert_eq!(error.to_string(), "File not found: notes.txt");
    }

    #[test]
    fn test_invalid_event_error_display() {
        let error = CliError::InvalidEvent("jump 3".to_string());
        assert_eq!(error.to_string(), "Invalid event: jump 3");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("no config directory".to_string());
        assert_eq!(error.to_string(), "Configuration error: no config directory");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::FileNotFound("x.txt".into()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("x.txt"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("ファイル/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/test 文件.txt");
    }
}
