//! User input and interaction handling.
//!
//! The orchestrator talks to the operator through the [`Prompter`] trait so
//! it can be driven by a scripted implementation in tests. The production
//! implementation uses dialoguer.

use crate::error::{ApicrudError, Result};
use dialoguer::{Confirm, Input};

/// Interactive question capability used by the orchestrator.
pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Asks for a free-form string answer.
    fn input(&self, message: &str) -> Result<String>;
}

/// Dialoguer-backed prompter.
pub struct DialoguerPrompter {
    assume_yes: bool,
}

impl DialoguerPrompter {
    /// Creates a new prompter. With `assume_yes` every confirmation returns
    /// true without rendering a prompt (the `--yes` flag).
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| ApicrudError::PromptError(e.to_string()))
    }

    fn input(&self, message: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ApicrudError::PromptError(e.to_string()))
    }
}
