//! User input utilities for interactive command-line prompts.
//!
//! Prompts read from any `BufRead` so they can be driven from tests; the
//! stdin wrappers are what handlers call.

use anyhow::{Context, Result};
use std::io::{self, BufRead};

/// How a yes/no answer was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Unrecognized,
}

fn parse_answer(input: &str) -> Answer {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Answer::Yes,
        "n" | "no" | "" => Answer::No,
        _ => Answer::Unrecognized,
    }
}

/// Prompts the user for a string input.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_string(prompt: &str) -> Result<String> {
    read_string(&mut io::stdin().lock(), prompt)
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    read_confirmation(&mut io::stdin().lock(), prompt)
}

fn read_string<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String> {
    println!("{prompt}: ");

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(input.trim().to_string())
}

/// End of input counts as 'no'.
fn read_confirmation<R: BufRead>(reader: &mut R, prompt: &str) -> Result<bool> {
    loop {
        println!("{prompt} (y/N): ");

        let mut input = String::new();
        let read = reader
            .read_line(&mut input)
            .context("Failed to read user input")?;
        if read == 0 {
            return Ok(false);
        }

        match parse_answer(&input) {
            Answer::Yes => return Ok(true),
            Answer::No => return Ok(false),
            Answer::Unrecognized => {
                eprintln!("Please enter 'y' for yes or 'n' for no.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("Y\n"), Answer::Yes);
        assert_eq!(parse_answer("yes"), Answer::Yes);
        assert_eq!(parse_answer(""), Answer::No);
        assert_eq!(parse_answer("NO"), Answer::No);
        assert_eq!(parse_answer("maybe"), Answer::Unrecognized);
    }

    #[test]
    fn test_confirmation_reprompts_on_garbage() {
        let mut input = Cursor::new("later\ny\n");
        assert!(read_confirmation(&mut input, "Restart now?").unwrap());
    }

    #[test]
    fn test_confirmation_eof_is_no() {
        let mut input = Cursor::new("");
        assert!(!read_confirmation(&mut input, "Restart now?").unwrap());
    }

    #[test]
    fn test_read_string_trims() {
        let mut input = Cursor::new("  16GB \n");
        assert_eq!(read_string(&mut input, "Option").unwrap(), "16GB");
    }
}
