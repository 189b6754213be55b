//! The reader session: one owner for every piece of mutable state
//!
//! Hosts forward two kinds of events: hovers ([`PagerSession::on_hover`])
//! and operator commands ([`PagerSession::on_command`]). Both run to
//! completion on the caller's thread. Settings are re-read on each event
//! rather than held, so the page count always reflects the latest
//! lines-per-page value.

use crate::classifier;
use crate::corpus::{self, Corpus, CorpusSource};
use crate::error::ReaderError;
use crate::hover_gate::{GateDecision, HoverGate};
use crate::pagination::{self, Direction, PagerState, RenderedPage};
use crate::persistence::StateStore;
use crate::settings::{ReaderSettings, SettingsSource};
use crate::status::StatusView;
use std::cell::Cell;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Message for the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Informational message
    Info(String),
    /// Recovered failure
    Error(String),
}

impl Notice {
    /// Message text
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(msg) | Notice::Error(msg) => msg,
        }
    }

    /// Whether this reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// A document the pointer can hover over
pub trait HoverDocument {
    /// Identity of the document, usually its path
    fn identifier(&self) -> &str;

    /// Text of a zero-based line, if it exists
    fn line_text(&self, line: usize) -> Option<&str>;
}

/// Cursor location inside a hovered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Zero-based line
    pub line: usize,
    /// Zero-based column
    pub character: usize,
}

impl Position {
    /// Position at `line`, `character`
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Set by the host when a pending hover request is abandoned
#[derive(Debug, Default)]
pub struct CancellationToken {
    cancelled: Cell<bool>,
}

impl CancellationToken {
    /// A token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the request as abandoned
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether the request was abandoned
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Answer to a hover request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision {
    /// Show nothing
    NoContent,
    /// Show this page
    Show(RenderedPage),
}

impl RenderDecision {
    /// The page to show, if any
    pub fn page(&self) -> Option<&RenderedPage> {
        match self {
            RenderDecision::NoContent => None,
            RenderDecision::Show(page) => Some(page),
        }
    }
}

/// Operator commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Enable or disable hover paging
    Toggle,
    /// Store a new lines-per-page value
    SetLinesPerPage(NonZeroUsize),
    /// Jump to a one-based page; out-of-range targets are clamped
    GotoPage(i64),
    /// Use a new text file and reload
    SelectFile(PathBuf),
    /// Change the direction of the next advance
    SetDirection(Direction),
    /// Go back to the first page
    Reset,
    /// Re-read the configured source
    Reload,
}

/// What a command left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDelta {
    /// Reader position after the command
    pub state: PagerState,
    /// Whether hover paging is enabled
    pub enabled: bool,
    /// Page shown on the next reused hover, if any
    pub rendered: Option<RenderedPage>,
    /// Messages for the operator
    pub notices: Vec<Notice>,
}

/// Outcome of [`PagerSession::sync_settings`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsSync {
    /// Whether the settings differ from the last ones the session saw
    pub changed: bool,
    /// Messages for the operator
    pub notices: Vec<Notice>,
}

/// Owns the corpus, the reader position and the hover gate
pub struct PagerSession<S, P> {
    settings: S,
    store: P,
    workspace_root: Option<PathBuf>,
    corpus: Corpus,
    synced: ReaderSettings,
    settings_unreadable: bool,
    state: PagerState,
    gate: HoverGate,
    last_rendered: Option<RenderedPage>,
}

impl<S: SettingsSource, P: StateStore> PagerSession<S, P> {
    /// Start a session: restore the position, load the corpus, leave paging disabled
    pub fn activate(
        settings: S,
        store: P,
        workspace_root: Option<PathBuf>,
    ) -> (Self, Vec<Notice>) {
        let state = store.load().unwrap_or_else(|err| {
            log::warn!("starting from the first page: {err}");
            PagerState::default()
        });

        let mut session = Self {
            settings,
            store,
            workspace_root,
            corpus: Corpus::default(),
            synced: ReaderSettings::default(),
            settings_unreadable: false,
            state,
            gate: HoverGate::new(),
            last_rendered: None,
        };

        let mut notices = Vec::new();
        session.synced = session.current_settings();
        let configured = session.synced.text_file_path.clone();
        session.load_corpus(&configured, false, &mut notices);
        (session, notices)
    }

    /// Replace the hover gate, e.g. to use a different cooldown
    pub fn with_gate(mut self, gate: HoverGate) -> Self {
        self.gate = gate;
        self
    }

    /// Current reader position
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Whether hover paging is enabled
    pub fn is_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// The loaded corpus
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Last page handed to the host, if paging is enabled
    pub fn last_rendered(&self) -> Option<&RenderedPage> {
        self.last_rendered.as_ref()
    }

    /// Settings source
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// State store
    pub fn store(&self) -> &P {
        &self.store
    }

    /// Workspace root used for relative paths
    pub fn workspace_root(&self) -> Option<&Path> {
        self.workspace_root.as_deref()
    }

    /// Settings as stored right now, the last readable values otherwise
    pub fn current_settings(&self) -> ReaderSettings {
        self.settings.read().unwrap_or_else(|err| {
            log::warn!("using last known settings: {err}");
            self.synced.clone()
        })
    }

    fn lines_per_page(&self) -> usize {
        self.current_settings().lines_per_page.max(1)
    }

    /// Page count for the current corpus and settings
    pub fn page_count(&self) -> usize {
        pagination::page_count(self.corpus.len(), self.lines_per_page())
    }

    /// Render the current page without touching any state
    pub fn render_current(&self) -> RenderedPage {
        pagination::render(&self.state, self.corpus.lines(), self.lines_per_page())
    }

    /// Contents of the status indicator
    pub fn status(&self) -> StatusView {
        let page_count = self.page_count();
        // An empty corpus always reads as the first page.
        let page = if page_count == 0 {
            0
        } else {
            self.state.current_page
        };
        StatusView::new(self.is_enabled(), self.state.direction, page, page_count)
    }

    /// Handle a hover over `position` in `document`
    pub fn on_hover<D: HoverDocument + ?Sized>(
        &mut self,
        document: &D,
        position: Position,
        token: &CancellationToken,
        now: Instant,
    ) -> RenderDecision {
        if token.is_cancelled() || !self.gate.is_enabled() {
            return RenderDecision::NoContent;
        }

        let line_text = document.line_text(position.line).unwrap_or_default();
        let noise = classifier::is_noise(document.identifier(), line_text);

        match self.gate.evaluate(noise, now) {
            GateDecision::Ignore => {
                log::trace!("ignoring hover on {}:{}", document.identifier(), position.line);
                RenderDecision::NoContent
            }
            GateDecision::Advance => {
                self.advance_page();
                let page = self.render_current();
                self.last_rendered = Some(page.clone());
                RenderDecision::Show(page)
            }
            GateDecision::Reuse => {
                let page = match &self.last_rendered {
                    Some(page) => page.clone(),
                    None => {
                        let page = self.render_current();
                        self.last_rendered = Some(page.clone());
                        page
                    }
                };
                RenderDecision::Show(page)
            }
        }
    }

    /// Apply an operator command
    pub fn on_command(&mut self, command: Command) -> StateDelta {
        log::debug!("command: {command:?}");
        let mut notices = Vec::new();

        match command {
            Command::Toggle => {
                if self.gate.toggle() {
                    self.last_rendered = Some(self.render_current());
                    notices.push(Notice::Info("Reader enabled".to_string()));
                } else {
                    self.last_rendered = None;
                    notices.push(Notice::Info("Reader disabled".to_string()));
                }
            }
            Command::SetLinesPerPage(lines) => {
                match self.settings.set_lines_per_page(lines) {
                    Ok(()) => self.synced.lines_per_page = lines.get(),
                    Err(err) => {
                        log::error!("failed to store lines per page: {err}");
                        notices.push(Notice::Error(format!("Could not save settings: {err}")));
                    }
                }
                self.refresh_rendered();
            }
            Command::GotoPage(target) => {
                if self.page_count() > 0 {
                    self.state = pagination::jump(
                        self.state,
                        target,
                        self.corpus.len(),
                        self.lines_per_page(),
                    );
                    notices.extend(self.persist());
                    self.refresh_rendered();
                }
            }
            Command::SelectFile(path) => self.select_file(&path, &mut notices),
            Command::SetDirection(direction) => {
                self.state.direction = direction;
                let message = match direction {
                    Direction::Forward => "Paging forward",
                    Direction::Backward => "Paging backward",
                };
                notices.push(Notice::Info(message.to_string()));
                notices.extend(self.persist());
                self.refresh_rendered();
            }
            Command::Reset => {
                self.state.current_page = 0;
                notices.extend(self.persist());
                self.refresh_rendered();
                notices.push(Notice::Info("Reset to first page".to_string()));
            }
            Command::Reload => {
                if let Some(settings) = self.read_settings(&mut notices) {
                    self.load_corpus(&settings.text_file_path, true, &mut notices);
                }
            }
        }

        self.delta(notices)
    }

    /// React to settings edited outside the session
    ///
    /// A changed text file path reloads the corpus; any other change only
    /// re-renders the page on display. Unreadable settings leave the corpus
    /// and position untouched and are reported once until they read again.
    pub fn sync_settings(&mut self) -> SettingsSync {
        let mut notices = Vec::new();
        let Some(settings) = self.read_settings(&mut notices) else {
            return SettingsSync {
                changed: false,
                notices,
            };
        };

        let changed = settings != self.synced;
        if settings.text_file_path != self.synced.text_file_path {
            self.load_corpus(&settings.text_file_path, true, &mut notices);
        } else {
            self.refresh_rendered();
        }
        self.synced = settings;

        SettingsSync { changed, notices }
    }

    /// Read settings, reporting the first failure in a row as a notice
    fn read_settings(&mut self, notices: &mut Vec<Notice>) -> Option<ReaderSettings> {
        match self.settings.read() {
            Ok(settings) => {
                self.settings_unreadable = false;
                Some(settings)
            }
            Err(err) => {
                log::warn!("keeping current text and position: {err}");
                if !self.settings_unreadable {
                    notices.push(Notice::Error(format!("Could not read settings: {err}")));
                }
                self.settings_unreadable = true;
                None
            }
        }
    }

    fn delta(&self, notices: Vec<Notice>) -> StateDelta {
        StateDelta {
            state: self.state,
            enabled: self.is_enabled(),
            rendered: self.last_rendered.clone(),
            notices,
        }
    }

    fn advance_page(&mut self) {
        let corpus_len = self.corpus.len();
        let lines = self.lines_per_page();
        if pagination::page_count(corpus_len, lines) == 0 {
            return;
        }

        let before = self.state.current_page;
        self.state = pagination::advance(self.state, corpus_len, lines);
        log::debug!(
            "page {} -> {} ({})",
            before,
            self.state.current_page,
            self.state.direction
        );

        // Hovers have no notice channel; a failed save is only logged.
        self.persist();
    }

    fn select_file(&mut self, path: &Path, notices: &mut Vec<Notice>) {
        let is_text = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if !is_text {
            let err = ReaderError::UnsupportedFile(path.to_path_buf());
            notices.push(Notice::Error(err.to_string()));
            return;
        }

        let configured = path.to_string_lossy();
        if let Err(err) = self.settings.set_text_file_path(&configured) {
            log::error!("failed to store text file path: {err}");
            notices.push(Notice::Error(format!("Could not save settings: {err}")));
            return;
        }

        self.load_corpus(&configured, true, notices);
    }

    /// Load the configured source; a successful reload starts at page 0
    fn load_corpus(&mut self, configured: &str, is_reload: bool, notices: &mut Vec<Notice>) {
        let source = CorpusSource::resolve(configured, self.workspace_root.as_deref());
        let report = corpus::load_with_fallback(&source);

        self.corpus = report.corpus;
        self.synced.text_file_path = configured.to_string();

        match report.error {
            None => {
                if is_reload {
                    self.state.current_page = 0;
                    notices.extend(self.persist());
                }
                notices.push(Notice::Info(format!("Loaded file: {}", report.source_name)));
            }
            Some(err) => {
                notices.push(Notice::Error(format!("Could not read file: {err}")));
            }
        }

        self.refresh_rendered();
    }

    fn persist(&mut self) -> Option<Notice> {
        let err = self.store.save(&self.state).err()?;
        log::error!("failed to save reader state: {err}");
        Some(Notice::Error(format!("Could not save reader state: {err}")))
    }

    fn refresh_rendered(&mut self) {
        if self.last_rendered.is_some() {
            self.last_rendered = Some(self.render_current());
        }
    }
}

/// A document held as a list of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    identifier: String,
    lines: Vec<String>,
}

impl TextDocument {
    /// Build a document from its identifier and full text
    pub fn new(identifier: impl Into<String>, text: &str) -> Self {
        Self {
            identifier: identifier.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

impl HoverDocument for TextDocument {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }
}
