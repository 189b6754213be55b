//! Page arithmetic over a line corpus
//!
//! Every function here is pure: the page count is derived from the corpus
//! length and the lines-per-page value passed in, never stored, so a
//! settings change is picked up on the next call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paging direction applied by [`advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Move towards the end of the document
    #[default]
    Forward,
    /// Move towards the start of the document
    Backward,
}

impl Direction {
    /// Token used in persisted state
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Position of the reader within the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagerState {
    /// Zero-based page index
    pub current_page: usize,
    /// Direction used by the next advance
    pub direction: Direction,
}

impl PagerState {
    /// Create a state at `page` moving in `direction`
    pub fn new(current_page: usize, direction: Direction) -> Self {
        Self {
            current_page,
            direction,
        }
    }
}

/// One page worth of lines, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    /// Zero-based index of the page
    pub page_index: usize,
    /// Page count at render time
    pub page_count: usize,
    /// Lines on this page
    pub lines: Vec<String>,
}

impl RenderedPage {
    /// Human readable page label, one-based
    pub fn label(&self) -> String {
        format!("Page {}/{}", self.page_index + 1, self.page_count)
    }

    /// Whether the page has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn effective_lines(lines_per_page: usize) -> usize {
    lines_per_page.max(1)
}

/// Number of pages needed for `corpus_len` lines
///
/// Returns 0 for an empty corpus. A `lines_per_page` of 0 is treated as 1.
pub fn page_count(corpus_len: usize, lines_per_page: usize) -> usize {
    corpus_len.div_ceil(effective_lines(lines_per_page))
}

/// Move one page in the state's direction, wrapping at either end
///
/// With no pages the state is returned unchanged.
pub fn advance(state: PagerState, corpus_len: usize, lines_per_page: usize) -> PagerState {
    let max_pages = page_count(corpus_len, lines_per_page);
    if max_pages == 0 {
        return state;
    }

    // A stale page from before a settings change is folded back in range first.
    let current = state.current_page % max_pages;
    let next = match state.direction {
        Direction::Forward => (current + 1) % max_pages,
        Direction::Backward => (current + max_pages - 1) % max_pages,
    };

    PagerState {
        current_page: next,
        ..state
    }
}

/// Jump to a one-based page number, clamped into the valid range
///
/// Targets below 1 land on the first page and targets past the end land on
/// the last one. With no pages the result is page 0.
pub fn jump(
    state: PagerState,
    target_one_based: i64,
    corpus_len: usize,
    lines_per_page: usize,
) -> PagerState {
    let max_pages = page_count(corpus_len, lines_per_page);
    let last = max_pages.saturating_sub(1) as i64;
    let page = (target_one_based.saturating_sub(1)).clamp(0, last) as usize;

    PagerState {
        current_page: page,
        ..state
    }
}

/// Slice the current page out of the corpus
pub fn render<S: AsRef<str>>(
    state: &PagerState,
    corpus: &[S],
    lines_per_page: usize,
) -> RenderedPage {
    let per_page = effective_lines(lines_per_page);
    let page_count = page_count(corpus.len(), per_page);

    let start = state.current_page.saturating_mul(per_page).min(corpus.len());
    let end = start.saturating_add(per_page).min(corpus.len());

    RenderedPage {
        // With no pages the stored index is meaningless; report the first page.
        page_index: if page_count == 0 { 0 } else { state.current_page },
        page_count,
        lines: corpus[start..end]
            .iter()
            .map(|line| line.as_ref().to_string())
            .collect(),
    }
}
