//! One-shot paging commands
//!
//! Each invocation activates a session, applies one command, saves and
//! exits. Hover paging itself needs a long-lived session, see `run`.

use super::{open_session, report_notices, FileSession};
use crate::config::GlobalArgs;
use crate::error::CliResult;
use crate::output::formatter_for;
use crate::prompt::prompt_until_valid;
use anyhow::{Context, Result};
use clap::Args;
use hover_reader_core::{
    parse_lines_per_page, parse_page_number, Command, Direction, Notice,
};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the goto command
#[derive(Debug, Args)]
pub struct GotoArgs {
    /// One-based page number; prompts when missing or out of range
    #[arg(value_name = "PAGE")]
    pub page: Option<String>,
}

/// Arguments for the lines command
#[derive(Debug, Args)]
pub struct LinesArgs {
    /// Lines per page; prompts when missing or not a positive number
    #[arg(value_name = "COUNT")]
    pub count: Option<String>,
}

/// Arguments for the select command
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Plain-text (.txt) file to read from now on
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Print the status indicator
pub fn status(global: &GlobalArgs) -> CliResult<()> {
    let session = activate(global)?;
    let mut out = formatter_for(global.format, io::stdout().lock());
    out.format_status(&session.status())?;
    out.finish()
}

/// Print the current page
pub fn show(global: &GlobalArgs) -> CliResult<()> {
    let session = activate(global)?;
    let mut out = formatter_for(global.format, io::stdout().lock());
    out.format_page(&session.render_current())?;
    out.finish()
}

impl GotoArgs {
    /// Execute the goto command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let mut session = activate(global)?;
        let max = session.page_count();
        if max == 0 {
            report_notices(
                &[Notice::Error("The text has no pages".to_string())],
                global.quiet,
            );
            return Ok(());
        }

        let stdin = io::stdin();
        let page = prompt_until_valid(
            &mut stdin.lock(),
            &mut io::stderr(),
            &format!("Page number (1-{max})"),
            self.page.as_deref(),
            |input| parse_page_number(input, max),
        )?;

        match page {
            Some(page) => apply(&mut session, Command::GotoPage(page as i64), global),
            None => Ok(()),
        }
    }
}

impl LinesArgs {
    /// Execute the lines command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let mut session = activate(global)?;

        let stdin = io::stdin();
        let lines = prompt_until_valid(
            &mut stdin.lock(),
            &mut io::stderr(),
            "Lines per page",
            self.count.as_deref(),
            parse_lines_per_page,
        )?;

        match lines {
            Some(lines) => apply(&mut session, Command::SetLinesPerPage(lines), global),
            None => Ok(()),
        }
    }
}

impl SelectArgs {
    /// Execute the select command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let mut session = activate(global)?;
        let file = std::path::absolute(&self.file)
            .with_context(|| format!("Failed to resolve {}", self.file.display()))?;
        apply(&mut session, Command::SelectFile(file), global)
    }
}

/// Set the paging direction
pub fn set_direction(direction: Direction, global: &GlobalArgs) -> CliResult<()> {
    let mut session = activate(global)?;
    apply(&mut session, Command::SetDirection(direction), global)
}

/// Go back to the first page
pub fn reset(global: &GlobalArgs) -> CliResult<()> {
    let mut session = activate(global)?;
    apply(&mut session, Command::Reset, global)
}

fn activate(global: &GlobalArgs) -> Result<FileSession> {
    let paths = global.resolve_paths()?;
    let (session, notices) = open_session(&paths);
    let errors: Vec<Notice> = notices.into_iter().filter(Notice::is_error).collect();
    report_notices(&errors, global.quiet);
    Ok(session)
}

/// Apply a command, report its notices, then redraw the status indicator
fn apply(session: &mut FileSession, command: Command, global: &GlobalArgs) -> Result<()> {
    let delta = session.on_command(command);
    report_notices(&delta.notices, global.quiet);

    let mut stdout = io::stdout().lock();
    let mut out = formatter_for(global.format, &mut stdout);
    out.format_status(&session.status())?;
    out.finish()?;
    drop(out);
    stdout.flush()?;
    Ok(())
}
