//! Unified error types for the contact-form scaffolder.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while collecting configuration or scaffolding.
#[derive(Error, Debug)]
pub enum ContactFormError {
    // --- Configuration ---

    /// A prompted value failed validation. Collection re-asks instead of
    /// surfacing this to the user as a failure.
    #[error("{0}")]
    Validation(String),

    /// The interactive prompt could not be completed (no terminal, interrupted).
    #[error("prompt failed: {0}")]
    Prompt(String),

    // --- Templates ---

    /// A template file could not be read from a template directory override.
    #[error("failed to read template {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Project writer ---

    /// A scaffold directory (`app/api/send`, `app/contact`) could not be created.
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The environment block could not be appended to `.env.local`.
    #[error("failed to append environment variables to {path}")]
    AppendEnv {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Dependency installer ---

    /// The package manager binary is not on `PATH`.
    #[error("required tool '{name}' not found (install: {install})")]
    MissingTool { name: String, install: String },

    /// The package manager exited unsuccessfully.
    #[error("dependency installation failed: `{command}` exited with {}", describe_code(.code))]
    DependencyInstall { command: String, code: Option<i32> },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".into(),
    }
}

/// Alias for `Result<T, ContactFormError>`.
pub type Result<T> = std::result::Result<T, ContactFormError>;
