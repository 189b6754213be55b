//! Version-control noise detection
//!
//! Hovering over commit logs, blame output or diffs should not turn pages.
//! This is a heuristic filter: false positives and negatives are expected.

use regex::Regex;
use std::sync::OnceLock;

/// Substrings of a lowercased source identifier that mark SCM content
const SOURCE_MARKERS: &[&str] = &[".git", "git-", "scm"];

/// Line prefixes used by unified diffs
const DIFF_PREFIXES: &[&str] = &["diff --git", "@@", "+", "-"];

static COMMIT_HASH: OnceLock<Regex> = OnceLock::new();
static SCM_KEYWORDS: OnceLock<Regex> = OnceLock::new();

fn commit_hash() -> &'static Regex {
    COMMIT_HASH.get_or_init(|| Regex::new(r"^[a-f0-9]{7,40}\b").expect("valid hash pattern"))
}

fn scm_keywords() -> &'static Regex {
    SCM_KEYWORDS.get_or_init(|| {
        Regex::new(r"(?i)\b(commit|author|date|merge|pull|push|branch)\b")
            .expect("valid keyword pattern")
    })
}

/// Whether a source identifier looks like version-control content
pub fn is_scm_source(source_identifier: &str) -> bool {
    let lowered = source_identifier.to_lowercase();
    SOURCE_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Whether a single line looks like commit metadata or diff output
pub fn is_scm_line(line_text: &str) -> bool {
    let trimmed = line_text.trim();

    commit_hash().is_match(trimmed)
        || scm_keywords().is_match(trimmed)
        || DIFF_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Whether a hover over `line_text` in `source_identifier` should be ignored
pub fn is_noise(source_identifier: &str, line_text: &str) -> bool {
    is_scm_source(source_identifier) || is_scm_line(line_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_directory_source() {
        assert!(is_noise("repo/.git/COMMIT_EDITMSG", "anything"));
        assert!(is_noise("/home/me/Repo/.GIT/config", "plain"));
    }

    #[test]
    fn test_scm_source_markers() {
        assert!(is_noise("git-rebase-todo", "plain prose"));
        assert!(is_noise("scm:/input", "plain prose"));
        assert!(is_noise("notes.gitignore", "plain prose"));
    }

    #[test]
    fn test_plain_prose_is_not_noise() {
        assert!(!is_noise("notes.txt", "plain prose line"));
        assert!(!is_noise("src/main.rs", "let x = 1;"));
    }

    #[test]
    fn test_keyword_lines() {
        assert!(is_noise("notes.txt", "commit abc123 by someone"));
        assert!(is_noise("notes.txt", "Author: Someone <a@b.c>"));
        assert!(is_noise("notes.txt", "Merge branch 'main'"));
        assert!(is_noise("notes.txt", "we should PUSH this"));
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        assert!(!is_noise("notes.txt", "committee meeting notes"));
        assert!(!is_noise("notes.txt", "an update was made"));
        assert!(!is_noise("notes.txt", "pushover"));
    }

    #[test]
    fn test_hash_prefix() {
        assert!(is_noise("log.txt", "3f2a9c1 fix typo"));
        assert!(is_noise(
            "log.txt",
            "  0123456789abcdef0123456789abcdef01234567"
        ));
        assert!(!is_noise("log.txt", "abc12 short"));
        assert!(!is_noise("log.txt", "3F2A9C1 uppercase hash"));
    }

    #[test]
    fn test_diff_markers() {
        assert!(is_noise("notes.txt", "+ added line"));
        assert!(is_noise("notes.txt", "-removed"));
        assert!(is_noise("notes.txt", "@@ -1,3 +1,4 @@"));
        assert!(is_noise("notes.txt", "diff --git a/x b/x"));
        assert!(is_noise("notes.txt", "   + indented addition"));
    }

    #[test]
    fn test_empty_line() {
        assert!(!is_noise("notes.txt", ""));
        assert!(!is_noise("notes.txt", "   "));
    }
}
