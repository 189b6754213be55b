//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use hover_reader_core::{RenderedPage, StatusView};
use std::io::Write;

/// Plain text formatter - page label, then one line per corpus line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_page(&mut self, page: &RenderedPage) -> Result<()> {
        writeln!(self.writer, "{}", page.label())?;
        for line in &page.lines {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    fn format_no_content(&mut self) -> Result<()> {
        writeln!(self.writer, "(no content)")?;
        Ok(())
    }

    fn format_status(&mut self, status: &StatusView) -> Result<()> {
        writeln!(self.writer, "{}", status.short_text())?;
        write!(self.writer, "{}", status.tooltip())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
