//! Loading the document that gets paged
//!
//! A corpus is the list of non-blank lines of one text source. It is rebuilt
//! wholesale on every reload and never edited in place.

use crate::error::{ReaderError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Text shipped with the crate, used when no file is configured
pub const BUNDLED_SAMPLE: &str = include_str!("../assets/sample.txt");

/// Lines shown when the configured file cannot be read
pub const PLACEHOLDER_LINES: [&str; 3] = ["Sample text 1", "Sample text 2", "Sample text 3"];

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Where the corpus comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// The bundled sample text
    Bundled,
    /// A file on disk
    File(PathBuf),
}

impl CorpusSource {
    /// Resolve a configured path
    ///
    /// An empty path selects the bundled sample. Relative paths are joined
    /// onto `workspace_root` when one is given, otherwise used as they are.
    pub fn resolve(configured: &str, workspace_root: Option<&Path>) -> Self {
        let configured = configured.trim();
        if configured.is_empty() {
            return CorpusSource::Bundled;
        }

        let path = PathBuf::from(configured);
        match workspace_root {
            Some(root) if path.is_relative() => CorpusSource::File(root.join(path)),
            _ => CorpusSource::File(path),
        }
    }

    /// Short name for operator messages
    pub fn display_name(&self) -> String {
        match self {
            CorpusSource::Bundled => "sample.txt".to_string(),
            CorpusSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// Ordered non-blank lines of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    /// Split text into lines, dropping a leading BOM and blank lines
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let lines = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        Self { lines }
    }

    /// The fixed corpus used after a failed load
    pub fn placeholder() -> Self {
        Self {
            lines: PLACEHOLDER_LINES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Result of a load attempt that always yields a usable corpus
#[derive(Debug)]
pub struct LoadReport {
    /// The corpus to page through
    pub corpus: Corpus,
    /// Name of the source for operator messages
    pub source_name: String,
    /// Set when the placeholder was substituted
    pub error: Option<ReaderError>,
}

impl LoadReport {
    /// Whether the requested source was actually loaded
    pub fn is_loaded(&self) -> bool {
        self.error.is_none()
    }
}

/// Read a source into a corpus
pub fn load(source: &CorpusSource) -> Result<Corpus> {
    match source {
        CorpusSource::Bundled => Ok(Corpus::from_text(BUNDLED_SAMPLE)),
        CorpusSource::File(path) => {
            let bytes = fs::read(path).map_err(|e| ReaderError::io(path, e))?;
            let text = String::from_utf8(bytes).map_err(|e| ReaderError::Encoding {
                path: path.clone(),
                position: e.utf8_error().valid_up_to(),
            })?;
            Ok(Corpus::from_text(&text))
        }
    }
}

/// Read a source, substituting the placeholder corpus on failure
pub fn load_with_fallback(source: &CorpusSource) -> LoadReport {
    let source_name = source.display_name();
    match load(source) {
        Ok(corpus) => {
            log::info!("loaded {} ({} lines)", source_name, corpus.len());
            LoadReport {
                corpus,
                source_name,
                error: None,
            }
        }
        Err(err) => {
            log::warn!("falling back to placeholder text: {err}");
            LoadReport {
                corpus: Corpus::placeholder(),
                source_name,
                error: Some(err),
            }
        }
    }
}
