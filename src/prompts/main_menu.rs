use crate::error::Result;
use crate::logging;
use crate::prompts::{
    Prompt, PromptType, Services, APP_SUBTITLE, APP_TITLE, GENERATE_CUSTOM_PASSWORD_TITLE,
    GENERATE_DEFAULT_PASSWORD_TITLE, HASH_PASSWORD_TITLE, TOOLTIP_OPTION,
};
use crate::terminal::Terminal;

const EXIT_ITEM: &str = "Exit";

/// Entry screen listing every feature
pub struct MainMenu;

impl MainMenu {
    /// Header suffix such as `" v1.2.3"`, empty when the version is unavailable
    fn version_suffix(services: &Services) -> String {
        match services.version.version() {
            Some(version) => format!(" v{version}"),
            None => {
                logging::log_version_unavailable();
                String::new()
            }
        }
    }
}

impl Prompt for MainMenu {
    fn show(&self, terminal: &mut dyn Terminal, services: &Services) -> Result<Option<PromptType>> {
        terminal.write_line(&format!(
            "=== {APP_TITLE}{} ===",
            Self::version_suffix(services)
        ))?;
        terminal.write_line(APP_SUBTITLE)?;
        terminal.write_line("")?;
        terminal.write_line("--- Main Menu ---")?;

        let items = [
            GENERATE_DEFAULT_PASSWORD_TITLE,
            GENERATE_CUSTOM_PASSWORD_TITLE,
            HASH_PASSWORD_TITLE,
            EXIT_ITEM,
        ];

        let next = match terminal.select(TOOLTIP_OPTION, &items, 0)? {
            0 => Some(PromptType::GenerateDefaultPassword),
            1 => Some(PromptType::GenerateCustomPassword),
            2 => Some(PromptType::HashPassword),
            _ => None,
        };

        Ok(next)
    }
}
