//! User input and interaction handling.
//! All interactive questions go through the `Prompter` trait so the engine
//! stays testable with non-interactive stubs.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};

/// Trait for interactive confirmation and text input.
pub trait Prompter {
    /// Asks a yes/no question.
    ///
    /// # Arguments
    /// * `skip` - When true, returns `Ok(true)` without asking
    /// * `message` - Question to display
    fn confirm(&self, skip: bool, message: String) -> Result<bool>;

    /// Asks for a line of text, optionally pre-filled with a default.
    fn text(&self, message: String, default: Option<String>) -> Result<String>;
}

/// Dialoguer-backed interactive prompter.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, message: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn text(&self, message: String, default: Option<String>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(message);
        if let Some(default) = default {
            input = input.default(default);
        }
        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }
}
