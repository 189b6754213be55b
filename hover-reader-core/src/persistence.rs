//! Durable reader position
//!
//! The page and direction are stored under the `hoverReader` key of a JSON
//! document. Other keys in the same document are left untouched.

use crate::error::{ReaderError, Result};
use crate::pagination::PagerState;
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Key the reader state is stored under
pub const STATE_KEY: &str = "hoverReader";

/// Somewhere to keep the reader position between runs
pub trait StateStore {
    /// Stored state, or the default when nothing was saved yet
    fn load(&self) -> Result<PagerState>;

    /// Store page and direction together
    fn save(&mut self, state: &PagerState) -> Result<()>;
}

/// In-memory store; clones share contents
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    state: Rc<RefCell<Option<PagerState>>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryStateStore {
    /// A store that already holds `state`
    pub fn with_state(state: PagerState) -> Self {
        Self {
            state: Rc::new(RefCell::new(Some(state))),
            saves: Rc::default(),
        }
    }

    /// Last saved state, if any
    pub fn stored(&self) -> Option<PagerState> {
        *self.state.borrow()
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<PagerState> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&mut self, state: &PagerState) -> Result<()> {
        *self.state.borrow_mut() = Some(*state);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// State kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    /// Use the file at `path`; it need not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the state file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_error(&self, reason: impl std::fmt::Display) -> ReaderError {
        ReaderError::StateParse {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(ReaderError::io(&self.path, e)),
        };

        match serde_json::from_str::<Value>(&content).map_err(|e| self.parse_error(e))? {
            Value::Object(map) => Ok(map),
            _ => Err(self.parse_error("top level is not an object")),
        }
    }
}

impl StateStore for JsonStateStore {
    fn load(&self) -> Result<PagerState> {
        let mut document = self.read_document()?;
        match document.remove(STATE_KEY) {
            Some(value) => serde_json::from_value(value).map_err(|e| self.parse_error(e)),
            None => Ok(PagerState::default()),
        }
    }

    fn save(&mut self, state: &PagerState) -> Result<()> {
        // An unreadable old file is replaced rather than blocking the save.
        let mut document = self.read_document().unwrap_or_else(|err| {
            log::warn!("discarding unreadable state file: {err}");
            Map::new()
        });
        document.insert(STATE_KEY.to_string(), serde_json::to_value(state)?);
        let rendered = serde_json::to_string_pretty(&Value::Object(document))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ReaderError::io(parent, e))?;
        }

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, rendered).map_err(|e| ReaderError::io(&staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| ReaderError::io(&self.path, e))?;

        log::debug!(
            "saved page {} ({}) to {}",
            state.current_page,
            state.direction,
            self.path.display()
        );
        Ok(())
    }
}
