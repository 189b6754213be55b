//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use hover_reader_core::{RenderedPage, StatusView};
use std::io::Write;

/// Markdown formatter - the layout an editor tooltip would show
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_page(&mut self, page: &RenderedPage) -> Result<()> {
        writeln!(self.writer, "*{}*", page.label())?;
        writeln!(self.writer)?;
        for line in &page.lines {
            writeln!(self.writer, "> {line}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_no_content(&mut self) -> Result<()> {
        Ok(())
    }

    fn format_status(&mut self, status: &StatusView) -> Result<()> {
        writeln!(self.writer, "### Hover Reader")?;
        writeln!(self.writer)?;
        if status.enabled {
            writeln!(self.writer, "- Status: enabled")?;
            writeln!(self.writer, "- Direction: {}", status.direction)?;
            writeln!(self.writer, "- Page: {}/{}", status.page, status.page_count)?;
        } else {
            writeln!(self.writer, "Toggle to start reading")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer)?;
        for entry in &status.menu {
            writeln!(self.writer, "[{}](command:{})", entry.label, entry.command)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
