//! Validation of operator-typed values
//!
//! Rejected input never reaches the session; the error text is shown as the
//! re-prompt message.

use crate::error::InputError;
use std::num::NonZeroUsize;

/// Parse a lines-per-page entry
pub fn parse_lines_per_page(input: &str) -> Result<NonZeroUsize, InputError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(InputError::LinesPerPage)
}

/// Parse a one-based page number bounded by the current page count
pub fn parse_page_number(input: &str, page_count: usize) -> Result<usize, InputError> {
    match input.trim().parse::<usize>() {
        Ok(page) if (1..=page_count).contains(&page) => Ok(page),
        _ => Err(InputError::PageOutOfRange { max: page_count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_per_page_accepts_positive() {
        assert_eq!(parse_lines_per_page("3").map(NonZeroUsize::get), Ok(3));
        assert_eq!(parse_lines_per_page(" 12 ").map(NonZeroUsize::get), Ok(12));
    }

    #[test]
    fn test_lines_per_page_rejects_bad_input() {
        for bad in ["0", "-2", "abc", "", "2.5", "3 lines"] {
            assert_eq!(parse_lines_per_page(bad), Err(InputError::LinesPerPage), "{bad}");
        }
    }

    #[test]
    fn test_page_number_bounds() {
        assert_eq!(parse_page_number("1", 3), Ok(1));
        assert_eq!(parse_page_number("3", 3), Ok(3));
        assert_eq!(
            parse_page_number("4", 3),
            Err(InputError::PageOutOfRange { max: 3 })
        );
        assert_eq!(
            parse_page_number("0", 3),
            Err(InputError::PageOutOfRange { max: 3 })
        );
        assert_eq!(
            parse_page_number("two", 3),
            Err(InputError::PageOutOfRange { max: 3 })
        );
    }

    #[test]
    fn test_page_number_with_no_pages() {
        assert!(parse_page_number("1", 0).is_err());
    }
}
