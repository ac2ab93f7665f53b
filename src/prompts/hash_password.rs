use colored::Colorize;

use crate::error::Result;
use crate::prompts::{Prompt, PromptType, Services, HASH_PASSWORD_TITLE, TOOLTIP_CONTINUE};
use crate::terminal::Terminal;

pub const NOT_IMPLEMENTED_MESSAGE: &str = "Password hashing is not yet implemented";

/// Placeholder screen for password hashing
pub struct HashPassword;

impl Prompt for HashPassword {
    fn show(&self, terminal: &mut dyn Terminal, _services: &Services) -> Result<Option<PromptType>> {
        terminal.write_line(&format!("=== {HASH_PASSWORD_TITLE} ==="))?;
        terminal.write_line(&NOT_IMPLEMENTED_MESSAGE.yellow().to_string())?;
        terminal.write_line("")?;
        terminal.pause(TOOLTIP_CONTINUE)?;

        Ok(Some(PromptType::MainMenu))
    }
}
