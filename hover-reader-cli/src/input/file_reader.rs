//! Reading hovered documents from disk

use crate::error::CliError;
use anyhow::{Context, Result};
use hover_reader_core::TextDocument;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Load a file as a hoverable document identified by its path
    pub fn read_document(path: &Path) -> Result<TextDocument> {
        let text = Self::read_text(path)?;
        Ok(TextDocument::new(path.display().to_string(), &text))
    }
}
