//! Optional interactive input
//!
//! The demo asks for a name at most once. Cancelling that read (Ctrl+C or
//! end-of-input) only skips the greeting; it never ends the run.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{DemoError, Result};

/// What came back from a single line read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Line(String),
    Cancelled,
}

/// Source of one line of user input
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<PromptOutcome>;
}

/// Terminal reader backed by rustyline
pub struct TerminalReader {
    editor: DefaultEditor,
}

impl TerminalReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| DemoError::Prompt(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> Result<PromptOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(PromptOutcome::Line(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                Ok(PromptOutcome::Cancelled)
            }
            Err(ReadlineError::Io(e)) => Err(DemoError::Io(e)),
            Err(e) => Err(DemoError::Prompt(e.to_string())),
        }
    }
}

/// Reader that replays canned outcomes, for driving the runner without a tty
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedReader {
    outcomes: Vec<PromptOutcome>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedReader {
    pub fn new(outcomes: Vec<PromptOutcome>) -> Self {
        Self {
            outcomes,
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<PromptOutcome> {
        self.prompts.push(prompt.to_string());
        if self.outcomes.is_empty() {
            Ok(PromptOutcome::Cancelled)
        } else {
            Ok(self.outcomes.remove(0))
        }
    }
}

/// The name to greet, if the line holds anything besides whitespace
pub fn greeting_name(outcome: &PromptOutcome) -> Option<&str> {
    match outcome {
        PromptOutcome::Line(line) if !line.trim().is_empty() => Some(line.as_str()),
        _ => None,
    }
}
