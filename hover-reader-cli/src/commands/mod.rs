//! CLI command implementations

use crate::config::{GlobalArgs, ReaderPaths};
use crate::error::CliResult;
use clap::Subcommand;
use hover_reader_core::{Direction, JsonStateStore, Notice, PagerSession, TomlSettings};
use std::io::{self, Write};

pub mod page;
pub mod run;

/// Session backed by the settings and state files on disk
pub type FileSession = PagerSession<TomlSettings, JsonStateStore>;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the status indicator and its menu
    Status,

    /// Print the current page without advancing
    Show,

    /// Jump to a page
    Goto(page::GotoArgs),

    /// Set how many lines make up a page
    Lines(page::LinesArgs),

    /// Select the plain-text file to read
    Select(page::SelectArgs),

    /// Page forward on each hover
    Forward,

    /// Page backward on each hover
    Backward,

    /// Go back to the first page
    Reset,

    /// Host a reading session driven by events on stdin
    Run(run::RunArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        log::debug!("Command: {:?}", self);
        match self {
            Commands::Status => page::status(global),
            Commands::Show => page::show(global),
            Commands::Goto(args) => args.execute(global),
            Commands::Lines(args) => args.execute(global),
            Commands::Select(args) => args.execute(global),
            Commands::Forward => page::set_direction(Direction::Forward, global),
            Commands::Backward => page::set_direction(Direction::Backward, global),
            Commands::Reset => page::reset(global),
            Commands::Run(args) => args.execute(global),
        }
    }
}

/// Activate a session over the configured files
pub fn open_session(paths: &ReaderPaths) -> (FileSession, Vec<Notice>) {
    log::info!(
        "Settings: {}, state: {}",
        paths.settings.display(),
        paths.state.display()
    );
    PagerSession::activate(
        TomlSettings::new(&paths.settings),
        JsonStateStore::new(&paths.state),
        paths.workspace.clone(),
    )
}

/// Print notices to stderr
pub fn report_notices(notices: &[Notice], quiet: bool) {
    if quiet {
        return;
    }
    if let Err(err) = write_notices(&mut io::stderr().lock(), notices) {
        log::warn!("failed to print notices: {err}");
    }
}

/// Write notices one per line
pub fn write_notices(writer: &mut dyn Write, notices: &[Notice]) -> io::Result<()> {
    for notice in notices {
        writeln!(writer, "{}", format_notice(notice))?;
    }
    Ok(())
}

fn format_notice(notice: &Notice) -> String {
    match notice {
        Notice::Info(message) => format!("info: {message}"),
        Notice::Error(message) => format!("error: {message}"),
    }
}
