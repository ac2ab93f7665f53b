use crate::charset::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::error::{Result, ValidationError};
use crate::logging;
use crate::options::{
    PasswordOptions, DEFAULT_AVOID_AMBIGUOUS_CHARACTERS, DEFAULT_INCLUDE_LOWERCASE,
    DEFAULT_INCLUDE_UPPERCASE, DEFAULT_LENGTH, DEFAULT_MINIMUM_DIGITS,
    DEFAULT_MINIMUM_SPECIAL_CHARACTERS,
};
use crate::prompts::input::{
    parse_length, parse_minimum_digits, parse_minimum_special_characters, prompt_until_valid,
};
use crate::prompts::{
    present_password, report_generation_failure, Prompt, PromptType, Services,
    GENERATE_CUSTOM_PASSWORD_TITLE, TOOLTIP_CONTINUE,
};
use crate::terminal::Terminal;

pub const SPECIAL_SKIPPED_MESSAGE: &str =
    "Special character input skipped, there is no room left for additional special characters.";

/// Walks the user through every option before generating
pub struct GenerateCustomPassword;

impl GenerateCustomPassword {
    fn write_constraints(terminal: &mut dyn Terminal) -> Result<()> {
        terminal.write_line("--- Constraints ---")?;
        terminal.write_line("The password must comply with the following constraints:")?;
        terminal.write_line(&format!(
            "- Length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH} characters"
        ))?;
        terminal.write_line(
            "- The password must at least contain uppercases, lowercases, digits, or special characters",
        )?;
        terminal.write_line(
            "- There may not be more digits and/or special characters than the length of the password",
        )?;
        terminal.write_line("")?;
        Ok(())
    }

    /// Collects the six options, re-asking numeric questions until the answer fits
    pub fn collect_options(terminal: &mut dyn Terminal) -> Result<PasswordOptions> {
        terminal.write_line("--- Preferences ---")?;

        let length = prompt_until_valid(
            terminal,
            &format!("Enter the length of the password (default {DEFAULT_LENGTH})"),
            parse_length,
        )?;

        let include_uppercase =
            terminal.confirm("Include uppercase characters?", DEFAULT_INCLUDE_UPPERCASE)?;
        let include_lowercase =
            terminal.confirm("Include lowercase characters?", DEFAULT_INCLUDE_LOWERCASE)?;

        let minimum_digits = prompt_until_valid(
            terminal,
            &format!(
                "Enter the minimum number of digits to be included (default {DEFAULT_MINIMUM_DIGITS})"
            ),
            |answer| parse_minimum_digits(answer, length),
        )?;

        let minimum_special_characters = if minimum_digits == length {
            terminal.write_line(SPECIAL_SKIPPED_MESSAGE)?;
            0
        } else {
            prompt_until_valid(
                terminal,
                &format!(
                    "Enter the minimum number of special characters to be included \
                     (default {DEFAULT_MINIMUM_SPECIAL_CHARACTERS})"
                ),
                |answer| parse_minimum_special_characters(answer, length, minimum_digits),
            )?
        };

        let avoid_ambiguous_characters = terminal.confirm(
            "Avoid ambiguous characters?",
            DEFAULT_AVOID_AMBIGUOUS_CHARACTERS,
        )?;

        Ok(PasswordOptions {
            length,
            include_uppercase,
            include_lowercase,
            minimum_digits,
            minimum_special_characters,
            avoid_ambiguous_characters,
        })
    }
}

impl Prompt for GenerateCustomPassword {
    fn show(&self, terminal: &mut dyn Terminal, services: &Services) -> Result<Option<PromptType>> {
        terminal.write_line(&format!("=== {GENERATE_CUSTOM_PASSWORD_TITLE} ==="))?;
        terminal.write_line("Generate a new password with the preferences of your choice.")?;
        terminal.write_line("")?;

        Self::write_constraints(terminal)?;
        let options = Self::collect_options(terminal)?;
        terminal.write_line("")?;

        if !options.has_character_source() {
            terminal.write_line(&ValidationError::NoCharacterSource.to_string())?;
            terminal.pause(TOOLTIP_CONTINUE)?;
            return Ok(Some(PromptType::MainMenu));
        }

        match services.generator.generate(&options) {
            Ok(password) => {
                logging::log_password_generated("custom", &options);
                present_password(terminal, services, &password)?;
            }
            Err(e) => report_generation_failure(terminal, "custom", &e)?,
        }

        terminal.pause(TOOLTIP_CONTINUE)?;

        Ok(Some(PromptType::MainMenu))
    }
}
