//! Terminal-backed [`Prompter`] using [`dialoguer`].

use dialoguer::{Confirm, Input};

use contact_form_core::config::{Prompter, Question};
use contact_form_core::error::{ContactFormError, Result};

use crate::output;

/// Asks questions on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &Question<'_>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(question.prompt);
        if let Some(default) = question.default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn reject(&mut self, message: &str) {
        output::print_warning(message);
    }
}

fn prompt_error(err: dialoguer::Error) -> ContactFormError {
    ContactFormError::Prompt(err.to_string())
}
