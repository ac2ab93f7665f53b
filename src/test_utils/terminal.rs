//! A [`Terminal`] that replays scripted answers and records everything written

use std::collections::VecDeque;

use crate::error::{AppError, Result};
use crate::terminal::Terminal;

#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    confirms: VecDeque<bool>,
    selections: VecDeque<usize>,
    lines: Vec<String>,
    prompts: Vec<String>,
    clears: usize,
    pauses: usize,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers for free-text questions, consumed in order
    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Answers for yes/no questions; once exhausted the question's default is used
    pub fn with_confirms(mut self, confirms: impl IntoIterator<Item = bool>) -> Self {
        self.confirms.extend(confirms);
        self
    }

    /// Menu choices by index, consumed in order
    pub fn with_selections(mut self, selections: impl IntoIterator<Item = usize>) -> Self {
        self.selections.extend(selections);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of free-text questions asked
    pub fn prompts_asked(&self) -> usize {
        self.prompts.len()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn pauses(&self) -> usize {
        self.pauses
    }
}

impl Terminal for ScriptedTerminal {
    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| AppError::terminal(format!("No scripted input left for: {prompt}")))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        self.lines.push(prompt.to_string());
        Ok(self.confirms.pop_front().unwrap_or(default))
    }

    fn select(&mut self, prompt: &str, items: &[&str], _default: usize) -> Result<usize> {
        self.lines.push(prompt.to_string());
        self.lines.extend(items.iter().map(|item| item.to_string()));
        let index = self
            .selections
            .pop_front()
            .ok_or_else(|| AppError::terminal(format!("No scripted selection left for: {prompt}")))?;
        if index >= items.len() {
            return Err(AppError::terminal(format!(
                "Scripted selection {index} out of range for: {prompt}"
            )));
        }
        Ok(index)
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        self.lines.push(message.to_string());
        self.pauses += 1;
        Ok(())
    }
}
