//! Scaffold configuration and the questions that produce it.
//!
//! [`FormConfig`] is built once per `init` run by [`collect_config`] and never
//! changes afterwards. Collection is written against the [`Prompter`] trait so
//! the CLI can back it with a terminal and tests with a script of answers.

use serde::{Deserialize, Serialize};

use crate::error::{ContactFormError, Result};

/// Default SMTP host offered at the prompt.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port offered at the prompt (submission with STARTTLS).
pub const DEFAULT_SMTP_PORT: &str = "587";

/// Values collected from the user that drive one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Address that receives form submissions. Always contains `@`.
    pub email_to: String,
    pub smtp_host: String,
    /// Kept as text; it is only ever substituted into generated files.
    pub smtp_port: String,
    pub install_dependencies: bool,
}

/// JSON body the generated API route accepts.
///
/// This crate never builds one at runtime. It pins the field names shared by
/// the generated form component and route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A single text question.
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    pub prompt: &'a str,
    pub default: Option<&'a str>,
}

/// Source of answers for [`collect_config`].
pub trait Prompter {
    /// Ask a free-text question. Returns the default when the user enters nothing.
    fn ask(&mut self, question: &Question<'_>) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Tell the user their last answer was rejected.
    fn reject(&mut self, message: &str);
}

/// Accept any value containing `@`.
pub fn validate_email(input: &str) -> Result<()> {
    if input.contains('@') {
        Ok(())
    } else {
        Err(ContactFormError::Validation("Please enter a valid email".into()))
    }
}

/// Ask the `init` questions in order and build a [`FormConfig`].
///
/// An email without `@` is rejected through [`Prompter::reject`] and asked
/// again; the loop only ends on a valid answer or a prompter error.
pub fn collect_config(prompter: &mut dyn Prompter) -> Result<FormConfig> {
    let email_to = ask_until_valid(
        prompter,
        &Question {
            prompt: "Enter the email address to receive form submissions",
            default: None,
        },
        validate_email,
    )?;

    let smtp_host = prompter.ask(&Question {
        prompt: "Enter SMTP host",
        default: Some(DEFAULT_SMTP_HOST),
    })?;

    let smtp_port = prompter.ask(&Question {
        prompt: "Enter SMTP port",
        default: Some(DEFAULT_SMTP_PORT),
    })?;

    let install_dependencies =
        prompter.confirm("Would you like to install required dependencies?", true)?;

    Ok(FormConfig {
        email_to,
        smtp_host,
        smtp_port,
        install_dependencies,
    })
}

fn ask_until_valid(
    prompter: &mut dyn Prompter,
    question: &Question<'_>,
    validate: fn(&str) -> Result<()>,
) -> Result<String> {
    loop {
        let answer = prompter.ask(question)?;
        match validate(&answer) {
            Ok(()) => return Ok(answer),
            Err(ContactFormError::Validation(message)) => {
                tracing::debug!("rejected answer for '{}': {message}", question.prompt);
                prompter.reject(&message);
            }
            Err(other) => return Err(other),
        }
    }
}
