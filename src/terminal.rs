//! Console access for the interactive prompts
//!
//! Prompts talk to a [`Terminal`] rather than stdin/stdout directly, which lets the whole
//! menu flow run against scripted input in tests.

use dialoguer::console::Term;
use dialoguer::{Confirm, Input, Select};

use crate::error::Result;

pub trait Terminal {
    fn clear(&mut self) -> Result<()>;

    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Reads one line of free text; an empty answer is allowed
    fn input(&mut self, prompt: &str) -> Result<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Returns the index of the chosen item
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Shows `message` and blocks until a key is pressed
    fn pause(&mut self, message: &str) -> Result<()>;
}

/// The real console, backed by dialoguer widgets
pub struct ConsoleTerminal {
    term: Term,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ConsoleTerminal {
    fn clear(&mut self) -> Result<()> {
        // Not a TTY (piped output): nothing to clear
        if self.term.is_term() {
            self.term.clear_screen()?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.term.write_line(line)?;
        Ok(())
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(value.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let value = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_on(&self.term)?;
        Ok(value)
    }

    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        let index = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_on(&self.term)?;
        Ok(index)
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        self.term.write_line(message)?;
        if self.term.is_term() {
            self.term.read_key()?;
        }
        Ok(())
    }
}
