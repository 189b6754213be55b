//! Re-prompting input boxes on a terminal

use anyhow::{Context, Result};
use hover_reader_core::InputError;
use std::io::{BufRead, Write};

/// Ask for a value until `validate` accepts it
///
/// `initial` is tried first when given (a value passed on the command line).
/// Each rejected entry prints the validation message and asks again. End of
/// input dismisses the prompt and yields `None`, leaving state untouched.
pub fn prompt_until_valid<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    initial: Option<&str>,
    validate: F,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    if let Some(value) = initial {
        match validate(value) {
            Ok(parsed) => return Ok(Some(parsed)),
            Err(err) => writeln!(output, "{err}")?,
        }
    }

    let mut line = String::new();
    loop {
        write!(output, "{prompt}: ")?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        match validate(line.trim_end_matches(&['\r', '\n'][..])) {
            Ok(parsed) => return Ok(Some(parsed)),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hover_reader_core::{parse_lines_per_page, parse_page_number};
    use std::io::Cursor;

    #[test]
    fn test_initial_value_accepted_without_prompting() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let value =
            prompt_until_valid(&mut input, &mut output, "Lines", Some("4"), parse_lines_per_page)
                .unwrap();
        assert_eq!(value.map(|v| v.get()), Some(4));
        assert!(output.is_empty());
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut input = Cursor::new("abc\n0\n3\n");
        let mut output = Vec::new();

        let value = prompt_until_valid(&mut input, &mut output, "Lines", None, parse_lines_per_page)
            .unwrap();
        assert_eq!(value.map(|v| v.get()), Some(3));

        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Please enter a number greater than 0").count(), 2);
        assert_eq!(shown.matches("Lines: ").count(), 3);
    }

    #[test]
    fn test_invalid_initial_falls_back_to_prompt() {
        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();

        let value = prompt_until_valid(&mut input, &mut output, "Page (1-5)", Some("9"), |s| {
            parse_page_number(s, 5)
        })
        .unwrap();
        assert_eq!(value, Some(2));
        assert!(String::from_utf8(output)
            .unwrap()
            .contains("Please enter a number between 1 and 5"));
    }

    #[test]
    fn test_end_of_input_dismisses() {
        let mut input = Cursor::new("nope\n");
        let mut output = Vec::new();

        let value = prompt_until_valid(&mut input, &mut output, "Lines", None, parse_lines_per_page)
            .unwrap();
        assert!(value.is_none());
    }
}
