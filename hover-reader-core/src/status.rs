//! Status indicator contents
//!
//! The host draws the indicator; this module only decides what it says.

use crate::pagination::Direction;
use serde::Serialize;
use std::fmt::Write;

/// One entry of the indicator's command menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Text shown to the operator
    pub label: &'static str,
    /// Host command identifier
    pub command: &'static str,
}

const ENABLED_MENU: &[MenuEntry] = &[
    MenuEntry {
        label: "Select file",
        command: "hover-reader.selectFile",
    },
    MenuEntry {
        label: "Set lines per page",
        command: "hover-reader.setLinesPerPage",
    },
    MenuEntry {
        label: "Go to page",
        command: "hover-reader.gotoPage",
    },
    MenuEntry {
        label: "Reset to first page",
        command: "hover-reader.reset",
    },
];

const DISABLED_MENU: &[MenuEntry] = &[
    MenuEntry {
        label: "Select file",
        command: "hover-reader.selectFile",
    },
    MenuEntry {
        label: "Open settings",
        command: "hover-reader.openSettings",
    },
];

/// Snapshot of what the indicator shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    /// Whether hovers turn pages
    pub enabled: bool,
    /// Direction of the next advance
    pub direction: Direction,
    /// One-based page number
    pub page: usize,
    /// Current page count
    pub page_count: usize,
    /// Commands offered from the indicator
    pub menu: Vec<MenuEntry>,
}

impl StatusView {
    /// Build the view for the given reader state
    pub fn new(
        enabled: bool,
        direction: Direction,
        current_page: usize,
        page_count: usize,
    ) -> Self {
        let menu = if enabled { ENABLED_MENU } else { DISABLED_MENU };
        Self {
            enabled,
            direction,
            page: current_page.saturating_add(1),
            page_count,
            menu: menu.to_vec(),
        }
    }

    /// Compact indicator text
    pub fn short_text(&self) -> String {
        if !self.enabled {
            return "[book]".to_string();
        }
        let arrow = match self.direction {
            Direction::Forward => "->",
            Direction::Backward => "<-",
        };
        format!("[book] {arrow}")
    }

    /// Multi-line tooltip, menu included
    pub fn tooltip(&self) -> String {
        let mut out = String::new();
        if self.enabled {
            out.push_str("Hover Reader\n");
            out.push_str("  status: enabled\n");
            let _ = writeln!(out, "  direction: {}", self.direction);
            let _ = writeln!(out, "  page: {}/{}", self.page, self.page_count);
        } else {
            out.push_str("Hover Reader\n");
            out.push_str("  status: disabled (toggle to start reading)\n");
        }
        for entry in &self.menu {
            let _ = writeln!(out, "  * {} ({})", entry.label, entry.command);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_view() {
        let view = StatusView::new(true, Direction::Backward, 2, 7);
        assert_eq!(view.page, 3);
        assert_eq!(view.short_text(), "[book] <-");

        let tooltip = view.tooltip();
        assert!(tooltip.contains("direction: backward"));
        assert!(tooltip.contains("page: 3/7"));
        assert!(tooltip.contains("hover-reader.gotoPage"));
    }

    #[test]
    fn test_disabled_view_menu() {
        let view = StatusView::new(false, Direction::Forward, 0, 3);
        assert_eq!(view.short_text(), "[book]");
        assert_eq!(view.menu.len(), 2);
        assert!(!view.tooltip().contains("page:"));
        assert!(view.tooltip().contains("hover-reader.selectFile"));
    }
}
