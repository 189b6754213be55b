//! Reader settings, read fresh on every use
//!
//! Settings live under the `[hoverReader]` table of a TOML file. Nothing here
//! caches values: each [`SettingsSource::read`] goes back to the store, so an
//! edit made behind the session's back shows up on the next computation.

use crate::error::{ReaderError, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Default lines shown per page
pub const DEFAULT_LINES_PER_PAGE: usize = 2;

/// Name of the settings table
pub const SETTINGS_SECTION: &str = "hoverReader";

/// Operator-facing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderSettings {
    /// Lines per page; 0 is treated as 1 by the pager
    pub lines_per_page: usize,
    /// Text file to read; empty selects the bundled sample
    pub text_file_path: String,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            text_file_path: String::new(),
        }
    }
}

/// Store the session reads its settings from
pub trait SettingsSource {
    /// Current settings
    fn read(&self) -> Result<ReaderSettings>;

    /// Persist a new lines-per-page value
    fn set_lines_per_page(&mut self, lines: NonZeroUsize) -> Result<()>;

    /// Persist a new text file path
    fn set_text_file_path(&mut self, path: &str) -> Result<()>;
}

/// Settings kept in memory
///
/// Clones share the same values, so a test can hold one handle and change
/// settings while a session owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    inner: Rc<RefCell<ReaderSettings>>,
}

impl MemorySettings {
    /// Start from the given settings
    pub fn new(settings: ReaderSettings) -> Self {
        Self {
            inner: Rc::new(RefCell::new(settings)),
        }
    }

    /// Replace all values, as an external editor would
    pub fn replace(&self, settings: ReaderSettings) {
        *self.inner.borrow_mut() = settings;
    }
}

impl SettingsSource for MemorySettings {
    fn read(&self) -> Result<ReaderSettings> {
        Ok(self.inner.borrow().clone())
    }

    fn set_lines_per_page(&mut self, lines: NonZeroUsize) -> Result<()> {
        self.inner.borrow_mut().lines_per_page = lines.get();
        Ok(())
    }

    fn set_text_file_path(&mut self, path: &str) -> Result<()> {
        self.inner.borrow_mut().text_file_path = path.to_string();
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(rename = "hoverReader", default)]
    hover_reader: ReaderSettings,
}

/// Settings stored in a TOML file
#[derive(Debug, Clone)]
pub struct TomlSettings {
    path: PathBuf,
}

impl TomlSettings {
    /// Use the file at `path`; it need not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_content(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReaderError::io(&self.path, e)),
        }
    }

    fn parse_error(&self, err: impl std::fmt::Display) -> ReaderError {
        ReaderError::SettingsParse {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }

    /// Read-modify-write a single key, keeping every other table intact
    fn update(&mut self, key: &str, value: toml::Value) -> Result<()> {
        let mut document: toml::Table = match self.read_content()? {
            Some(content) => toml::from_str(&content).map_err(|e| self.parse_error(e))?,
            None => toml::Table::new(),
        };

        let section = document
            .entry(SETTINGS_SECTION)
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        match section {
            toml::Value::Table(table) => {
                table.insert(key.to_string(), value);
            }
            _ => {
                return Err(self.parse_error(format!("`{SETTINGS_SECTION}` is not a table")));
            }
        }

        let rendered = toml::to_string_pretty(&document)
            .map_err(|e| ReaderError::SettingsWrite(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ReaderError::io(parent, e))?;
        }
        fs::write(&self.path, rendered).map_err(|e| ReaderError::io(&self.path, e))?;

        log::debug!("updated {SETTINGS_SECTION}.{key} in {}", self.path.display());
        Ok(())
    }
}

impl SettingsSource for TomlSettings {
    fn read(&self) -> Result<ReaderSettings> {
        let Some(content) = self.read_content()? else {
            return Ok(ReaderSettings::default());
        };

        let file: SettingsFile = toml::from_str(&content).map_err(|e| self.parse_error(e))?;
        Ok(file.hover_reader)
    }

    fn set_lines_per_page(&mut self, lines: NonZeroUsize) -> Result<()> {
        let value = i64::try_from(lines.get())
            .map_err(|_| ReaderError::SettingsWrite(format!("{lines} is too large")))?;
        self.update("linesPerPage", toml::Value::Integer(value))
    }

    fn set_text_file_path(&mut self, path: &str) -> Result<()> {
        self.update("textFilePath", toml::Value::String(path.to_string()))
    }
}
