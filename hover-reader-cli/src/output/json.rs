//! JSON output formatter
//!
//! Each event is written as soon as it happens, one object per line, so the
//! `run` loop can be consumed as a stream.

use super::OutputFormatter;
use anyhow::Result;
use hover_reader_core::{RenderedPage, StatusView};
use serde::Serialize;
use std::io::Write;

/// JSON-lines formatter
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Envelope for every emitted object
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JsonEvent<'a> {
    /// A page to display
    Page {
        /// Human readable label
        label: String,
        /// The page itself
        #[serde(flatten)]
        page: &'a RenderedPage,
    },
    /// A hover with nothing to show
    NoContent,
    /// The status indicator
    Status {
        /// Compact indicator text
        text: String,
        /// The indicator contents
        #[serde(flatten)]
        status: &'a StatusView,
    },
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, event: &JsonEvent<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_page(&mut self, page: &RenderedPage) -> Result<()> {
        self.emit(&JsonEvent::Page {
            label: page.label(),
            page,
        })
    }

    fn format_no_content(&mut self) -> Result<()> {
        self.emit(&JsonEvent::NoContent)
    }

    fn format_status(&mut self, status: &StatusView) -> Result<()> {
        self.emit(&JsonEvent::Status {
            text: status.short_text(),
            status,
        })
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
