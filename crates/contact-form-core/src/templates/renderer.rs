//! Literal placeholder substitution for scaffold templates.
//!
//! There is no template language here. [`Placeholders`] is an ordered list of
//! `token -> value` pairs applied with [`str::replacen`] and a count of one, so:
//!
//! - tokens are replaced in list order (`EMAIL_TO`, `SMTP_HOST`, `SMTP_PORT`);
//! - only the **first** occurrence of each token is replaced, later ones stay
//!   literal;
//! - unknown `{{...}}` text passes through untouched;
//! - values are inserted raw, with no quoting or escaping for the target
//!   language. Callers must supply values that are safe inside a single-quoted
//!   TypeScript string and a `.env` line.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer};
//!
//! let route = renderer::render(embedded::API_ROUTE, Some(&config));
//! let page = renderer::render(embedded::CONTACT_PAGE, None);
//! ```

use crate::config::FormConfig;

pub const EMAIL_TO: &str = "{{EMAIL_TO}}";
pub const SMTP_HOST: &str = "{{SMTP_HOST}}";
pub const SMTP_PORT: &str = "{{SMTP_PORT}}";

/// Ordered placeholder mapping built from a [`FormConfig`].
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    entries: Vec<(&'static str, &'a str)>,
}

impl<'a> Placeholders<'a> {
    pub fn from_config(config: &'a FormConfig) -> Self {
        Self {
            entries: vec![
                (EMAIL_TO, config.email_to.as_str()),
                (SMTP_HOST, config.smtp_host.as_str()),
                (SMTP_PORT, config.smtp_port.as_str()),
            ],
        }
    }

    pub fn entries(&self) -> &[(&'static str, &'a str)] {
        &self.entries
    }

    /// Replace the first occurrence of each token, in order.
    pub fn apply(&self, template: &str) -> String {
        self.entries
            .iter()
            .fold(template.to_string(), |acc, &(token, value)| {
                acc.replacen(token, value, 1)
            })
    }
}

/// Render a template. Without a config the template is returned unchanged.
pub fn render(template: &str, config: Option<&FormConfig>) -> String {
    match config {
        Some(config) => Placeholders::from_config(config).apply(template),
        None => template.to_string(),
    }
}
