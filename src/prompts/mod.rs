//! Screens of the interactive menu
//!
//! Each screen implements [`Prompt`] and returns the [`PromptType`] to show next, or `None`
//! to leave the application. Screens reach the generator, clipboard and version through
//! [`Services`] so they can be exercised with mocks.

pub mod generate_custom;
pub mod generate_default;
pub mod hash_password;
pub mod input;
pub mod main_menu;

use colored::Colorize;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::{Result, ValidationError};
use crate::generator::{PasswordGenerator, RandomPasswordGenerator};
use crate::logging;
use crate::terminal::Terminal;
use crate::version::{CargoVersionProvider, VersionProvider};

pub use generate_custom::GenerateCustomPassword;
pub use generate_default::GenerateDefaultPassword;
pub use hash_password::HashPassword;
pub use main_menu::MainMenu;

pub const APP_TITLE: &str = "Password Generator";
pub const APP_SUBTITLE: &str = "Generate and/or hash passwords.";
pub const TOOLTIP_OPTION: &str = "Select an option:";
pub const TOOLTIP_CONTINUE: &str = "Press any key to continue.";

pub const GENERATE_DEFAULT_PASSWORD_TITLE: &str = "Generate Default Password";
pub const GENERATE_CUSTOM_PASSWORD_TITLE: &str = "Generate Custom Password";
pub const HASH_PASSWORD_TITLE: &str = "Hash Password";

pub const GENERATION_FAILED_MESSAGE: &str = "An error occurred while generating the password.";
pub const CLIPBOARD_SAVED_MESSAGE: &str = "Your new password was saved to your clipboard.";
pub const CLIPBOARD_FAILED_MESSAGE: &str = "Your new password could not be saved to your \
     clipboard, make sure you have the correct dependencies installed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    MainMenu,
    GenerateDefaultPassword,
    GenerateCustomPassword,
    HashPassword,
}

impl PromptType {
    pub fn name(self) -> &'static str {
        match self {
            Self::MainMenu => "main_menu",
            Self::GenerateDefaultPassword => "generate_default_password",
            Self::GenerateCustomPassword => "generate_custom_password",
            Self::HashPassword => "hash_password",
        }
    }

    pub fn create(self) -> Box<dyn Prompt> {
        match self {
            Self::MainMenu => Box::new(MainMenu),
            Self::GenerateDefaultPassword => Box::new(GenerateDefaultPassword),
            Self::GenerateCustomPassword => Box::new(GenerateCustomPassword),
            Self::HashPassword => Box::new(HashPassword),
        }
    }
}

pub trait Prompt {
    /// Runs the screen and returns where to go next
    fn show(&self, terminal: &mut dyn Terminal, services: &Services) -> Result<Option<PromptType>>;
}

/// Collaborators shared by every screen
pub struct Services {
    pub generator: Box<dyn PasswordGenerator>,
    pub clipboard: Box<dyn Clipboard>,
    pub version: Box<dyn VersionProvider>,
}

impl Services {
    pub fn new(
        generator: Box<dyn PasswordGenerator>,
        clipboard: Box<dyn Clipboard>,
        version: Box<dyn VersionProvider>,
    ) -> Self {
        Self {
            generator,
            clipboard,
            version,
        }
    }

    /// The production wiring: thread RNG, platform clipboard tool, Cargo version
    pub fn system() -> Self {
        Self::new(
            Box::new(RandomPasswordGenerator::new()),
            Box::new(SystemClipboard::default()),
            Box::new(CargoVersionProvider),
        )
    }
}

/// Prints a freshly generated password and tries to copy it to the clipboard
///
/// A clipboard failure is logged and reported; the password stays on screen either way.
pub(crate) fn present_password(
    terminal: &mut dyn Terminal,
    services: &Services,
    password: &str,
) -> Result<()> {
    terminal.write_line("Generating password...")?;
    terminal.write_line("")?;
    terminal.write_line(&format!("New password: {}", password.bold()))?;

    match services.clipboard.set_text(password) {
        Ok(()) => {
            logging::log_clipboard_result(true, None);
            terminal.write_line(&format!("{} {}", "✓".green(), CLIPBOARD_SAVED_MESSAGE))?;
        }
        Err(e) => {
            logging::log_clipboard_result(false, Some(&e));
            terminal.write_line(&format!("{} {}", "⚠".yellow(), CLIPBOARD_FAILED_MESSAGE))?;
        }
    }

    terminal.write_line("")?;
    Ok(())
}

pub(crate) fn report_generation_failure(
    terminal: &mut dyn Terminal,
    source: &str,
    error: &ValidationError,
) -> Result<()> {
    logging::log_generation_failure(source, error);
    terminal.write_line(&format!("{} {}", "✗".red(), GENERATION_FAILED_MESSAGE))?;
    terminal.write_line(&format!("  {} {}", "→".blue(), error))?;
    terminal.write_line("")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_type_names_are_unique() {
        let names = [
            PromptType::MainMenu.name(),
            PromptType::GenerateDefaultPassword.name(),
            PromptType::GenerateCustomPassword.name(),
            PromptType::HashPassword.name(),
        ];
        let unique: std::collections::HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }
}
