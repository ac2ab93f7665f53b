use crate::error::Result;
use crate::logging;
use crate::options::PasswordOptions;
use crate::prompts::{
    present_password, report_generation_failure, Prompt, PromptType, Services,
    GENERATE_DEFAULT_PASSWORD_TITLE, TOOLTIP_CONTINUE,
};
use crate::terminal::Terminal;

/// Generates a password with the default options in one step
pub struct GenerateDefaultPassword;

impl Prompt for GenerateDefaultPassword {
    fn show(&self, terminal: &mut dyn Terminal, services: &Services) -> Result<Option<PromptType>> {
        terminal.write_line(&format!("=== {GENERATE_DEFAULT_PASSWORD_TITLE} ==="))?;
        terminal.write_line("Generate a new password with default secure settings.")?;
        terminal.write_line("")?;

        let options = PasswordOptions::default();

        match services.generator.generate(&options) {
            Ok(password) => {
                logging::log_password_generated("default", &options);
                present_password(terminal, services, &password)?;
            }
            Err(e) => report_generation_failure(terminal, "default", &e)?,
        }

        terminal.pause(TOOLTIP_CONTINUE)?;

        Ok(Some(PromptType::MainMenu))
    }
}
