//! Output formatting module

use anyhow::Result;
use hover_reader_core::{RenderedPage, StatusView};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write a page produced by a hover or a `show` request
    fn format_page(&mut self, page: &RenderedPage) -> Result<()>;

    /// Write a hover answer that has nothing to show
    fn format_no_content(&mut self) -> Result<()>;

    /// Write the status indicator
    fn format_status(&mut self, status: &StatusView) -> Result<()>;

    /// Flush pending output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// One JSON object per line
    Json,
    /// Markdown, as shown in an editor tooltip
    Markdown,
}

/// Build the formatter for `format` writing to `writer`
pub fn formatter_for<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
