//! Event-driven reading session
//!
//! `run` keeps one session alive and feeds it host events, one per line:
//!
//! ```text
//! toggle                  enable or disable hover paging
//! hover FILE LINE [COL]   hover over a one-based position in FILE
//! sleep MS                wait before the next event
//! goto PAGE               jump to a one-based page
//! lines COUNT             set lines per page
//! select FILE             read a different .txt file
//! forward | backward      set the paging direction
//! reset                   back to the first page
//! reload                  re-read the configured file
//! status | show           print the indicator or the current page
//! quit                    stop
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Settings are
//! re-read before every event, so edits to the settings file take effect
//! while the session runs.

use super::{open_session, write_notices};
use crate::config::GlobalArgs;
use crate::error::{CliError, CliResult};
use crate::input::FileReader;
use crate::output::{formatter_for, OutputFormatter};
use anyhow::{Context, Result};
use clap::Args;
use hover_reader_core::{
    parse_lines_per_page, parse_page_number, CancellationToken, Command, Direction, Notice,
    PagerSession, Position, RenderDecision, SettingsSource, StateStore,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Read events from this file instead of stdin
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let paths = global.resolve_paths()?;
        let (session, notices) = open_session(&paths);

        let stdout = io::stdout();
        let output = formatter_for(global.format, stdout.lock());
        let notice_sink: Box<dyn Write> = if global.quiet {
            Box::new(io::sink())
        } else {
            Box::new(io::stderr())
        };

        let mut event_loop = EventLoop::new(session, output, notice_sink);
        event_loop.notify(&notices)?;

        match &self.script {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open script: {}", path.display()))?;
                event_loop.run(BufReader::new(file))
            }
            None => event_loop.run(io::stdin().lock()),
        }
    }
}

/// One parsed event line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Enable or disable hover paging
    Toggle,
    /// Hover at a zero-based position in a file
    Hover {
        /// Hovered file
        file: PathBuf,
        /// Zero-based position
        position: Position,
    },
    /// Pause before the next event
    Sleep(Duration),
    /// Jump to a page, raw operator input
    Goto(String),
    /// Set lines per page, raw operator input
    Lines(String),
    /// Select a text file
    Select(PathBuf),
    /// Set the paging direction
    Direction(Direction),
    /// Back to the first page
    Reset,
    /// Re-read the configured text file
    Reload,
    /// Print the status indicator
    Status,
    /// Print the current page
    Show,
    /// Stop the loop
    Quit,
}

impl HostEvent {
    /// Parse one line; `Ok(None)` for blank lines and comments
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let invalid = || CliError::InvalidEvent(line.to_string());
        let mut words = line.split_whitespace();
        let name = words.next().ok_or_else(invalid)?;
        let args: Vec<&str> = words.collect();

        let event = match (name, args.as_slice()) {
            ("toggle", []) => HostEvent::Toggle,
            ("hover", [file, line_no, rest @ ..]) if rest.len() <= 1 => {
                let line_no = one_based(line_no).ok_or_else(invalid)?;
                let column = match rest.first() {
                    Some(column) => one_based(column).ok_or_else(invalid)?,
                    None => 0,
                };
                HostEvent::Hover {
                    file: PathBuf::from(file),
                    position: Position::new(line_no, column),
                }
            }
            ("sleep", [millis]) => {
                let millis = millis.parse::<u64>().map_err(|_| invalid())?;
                HostEvent::Sleep(Duration::from_millis(millis))
            }
            ("goto", [page]) => HostEvent::Goto(page.to_string()),
            ("lines", [count]) => HostEvent::Lines(count.to_string()),
            ("select", [file]) => HostEvent::Select(PathBuf::from(file)),
            ("forward", []) => HostEvent::Direction(Direction::Forward),
            ("backward", []) => HostEvent::Direction(Direction::Backward),
            ("reset", []) => HostEvent::Reset,
            ("reload", []) => HostEvent::Reload,
            ("status", []) => HostEvent::Status,
            ("show", []) => HostEvent::Show,
            ("quit" | "exit", []) => HostEvent::Quit,
            _ => return Err(invalid()),
        };
        Ok(Some(event))
    }
}

/// Parse a one-based number into a zero-based index
fn one_based(text: &str) -> Option<usize> {
    text.parse::<usize>().ok()?.checked_sub(1)
}

/// Drives a session from a stream of host events
pub struct EventLoop<'a, S, P> {
    session: PagerSession<S, P>,
    output: Box<dyn OutputFormatter + 'a>,
    notices: Box<dyn Write + 'a>,
}

impl<'a, S: SettingsSource, P: StateStore> EventLoop<'a, S, P> {
    /// Wrap a session; pages go to `output`, notices to `notices`
    pub fn new(
        session: PagerSession<S, P>,
        output: Box<dyn OutputFormatter + 'a>,
        notices: Box<dyn Write + 'a>,
    ) -> Self {
        Self {
            session,
            output,
            notices,
        }
    }

    /// The driven session
    pub fn session(&self) -> &PagerSession<S, P> {
        &self.session
    }

    /// Process events until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line.context("Failed to read event")?;
            let event = match HostEvent::parse(&line) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(err) => {
                    log::warn!("line {}: {err}", index + 1);
                    self.notify(&[Notice::Error(err.to_string())])?;
                    continue;
                }
            };

            if event == HostEvent::Quit {
                break;
            }

            let sync = self.session.sync_settings();
            self.notify(&sync.notices)?;
            if sync.changed {
                self.output.format_status(&self.session.status())?;
            }
            self.handle(event)?;
        }

        self.output.finish()
    }

    /// Print notices
    pub fn notify(&mut self, notices: &[Notice]) -> Result<()> {
        write_notices(self.notices.as_mut(), notices)?;
        Ok(())
    }

    fn handle(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::Toggle => self.apply(Command::Toggle),
            HostEvent::Hover { file, position } => self.hover(file, position),
            HostEvent::Sleep(duration) => {
                thread::sleep(duration);
                Ok(())
            }
            HostEvent::Goto(input) => {
                let max = self.session.page_count();
                if max == 0 {
                    return self.notify(&[Notice::Error("The text has no pages".to_string())]);
                }
                match parse_page_number(&input, max) {
                    Ok(page) => self.apply(Command::GotoPage(page as i64)),
                    Err(err) => self.notify(&[Notice::Error(err.to_string())]),
                }
            }
            HostEvent::Lines(input) => match parse_lines_per_page(&input) {
                Ok(lines) => self.apply(Command::SetLinesPerPage(lines)),
                Err(err) => self.notify(&[Notice::Error(err.to_string())]),
            },
            HostEvent::Select(file) => {
                let file = std::path::absolute(&file)
                    .with_context(|| format!("Failed to resolve {}", file.display()))?;
                self.apply(Command::SelectFile(file))
            }
            HostEvent::Direction(direction) => self.apply(Command::SetDirection(direction)),
            HostEvent::Reset => self.apply(Command::Reset),
            HostEvent::Reload => self.apply(Command::Reload),
            HostEvent::Status => self.output.format_status(&self.session.status()),
            HostEvent::Show => self.output.format_page(&self.session.render_current()),
            HostEvent::Quit => Ok(()),
        }
    }

    fn hover(&mut self, file: PathBuf, position: Position) -> Result<()> {
        let document = match FileReader::read_document(&file) {
            Ok(document) => document,
            Err(err) => {
                log::warn!("hover skipped: {err:#}");
                return self.notify(&[Notice::Error(err.to_string())]);
            }
        };

        let token = CancellationToken::new();
        let before = self.session.state();
        match self
            .session
            .on_hover(&document, position, &token, Instant::now())
        {
            RenderDecision::Show(page) => self.output.format_page(&page)?,
            RenderDecision::NoContent => self.output.format_no_content()?,
        }

        if self.session.state() != before {
            self.output.format_status(&self.session.status())?;
        }
        Ok(())
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        let delta = self.session.on_command(command);
        self.notify(&delta.notices)?;
        self.output.format_status(&self.session.status())
    }
}
