use crate::error::Result;
use crate::logging;
use crate::prompts::{PromptType, Services};
use crate::terminal::Terminal;

/// Drives the interactive menu until a screen asks to exit
pub struct PromptRunner<T: Terminal> {
    terminal: T,
    services: Services,
}

impl<T: Terminal> PromptRunner<T> {
    pub fn new(terminal: T, services: Services) -> Self {
        Self { terminal, services }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut current = Some(PromptType::MainMenu);

        while let Some(prompt_type) = current {
            self.terminal.clear()?;

            let next = prompt_type
                .create()
                .show(&mut self.terminal, &self.services)?;

            logging::log_prompt_transition(prompt_type.name(), next.map(PromptType::name));
            current = next;
        }

        Ok(())
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }
}
