//! Parsing and validation of typed answers
//!
//! The parsers are pure: an empty answer selects the default, anything else must be a
//! number that fits the constraints gathered so far. [`prompt_until_valid`] repeats a
//! question until its parser accepts the answer.

use crate::charset::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::error::Result;
use crate::options::{DEFAULT_LENGTH, DEFAULT_MINIMUM_DIGITS, DEFAULT_MINIMUM_SPECIAL_CHARACTERS};
use crate::terminal::Terminal;

/// Parses a signed count so negative answers get a specific message
fn parse_count(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

pub fn parse_length(input: &str) -> std::result::Result<usize, String> {
    if input.trim().is_empty() {
        return Ok(DEFAULT_LENGTH);
    }

    let range = MIN_PASSWORD_LENGTH as i64..=MAX_PASSWORD_LENGTH as i64;
    match parse_count(input) {
        Some(length) if range.contains(&length) => Ok(length as usize),
        _ => Err(format!(
            "The password length must be a number between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}."
        )),
    }
}

pub fn parse_minimum_digits(input: &str, length: usize) -> std::result::Result<usize, String> {
    if input.trim().is_empty() {
        return Ok(DEFAULT_MINIMUM_DIGITS.min(length));
    }

    match parse_count(input) {
        Some(digits) if digits >= 0 && digits as u64 <= length as u64 => Ok(digits as usize),
        _ => Err("The minimum number of digits must be a non-negative number and cannot \
                  exceed the password length."
            .to_string()),
    }
}

pub fn parse_minimum_special_characters(
    input: &str,
    length: usize,
    minimum_digits: usize,
) -> std::result::Result<usize, String> {
    let room = length.saturating_sub(minimum_digits);

    if input.trim().is_empty() {
        return Ok(DEFAULT_MINIMUM_SPECIAL_CHARACTERS.min(room));
    }

    match parse_count(input) {
        Some(special) if special >= 0 && special as u64 <= room as u64 => Ok(special as usize),
        _ => Err("The minimum number of special characters must be a non-negative number \
                  and the combined total of special characters and digits cannot exceed \
                  the password's length."
            .to_string()),
    }
}

/// Asks `prompt` until `parse` accepts the answer, printing each rejection
pub fn prompt_until_valid<T, F>(terminal: &mut dyn Terminal, prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> std::result::Result<T, String>,
{
    loop {
        let answer = terminal.input(prompt)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(message) => {
                tracing::debug!(prompt = prompt, "Rejected answer");
                terminal.write_line(&message)?;
            }
        }
    }
}
