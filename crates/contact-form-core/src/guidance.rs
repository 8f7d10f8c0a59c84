//! Next-step guidance shown after a successful scaffold.

use crate::config::FormConfig;

/// A titled block of numbered instructions, with an optional code snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    pub title: &'static str,
    pub steps: Vec<&'static str>,
    pub snippet: Option<&'static str>,
}

/// True when the SMTP host is a Gmail server (substring match).
pub fn is_gmail(smtp_host: &str) -> bool {
    smtp_host.contains("gmail")
}

/// Guidance for the given configuration. Always starts with the general next
/// steps; Gmail hosts get an extra app-password section.
pub fn next_steps(config: &FormConfig) -> Vec<Guidance> {
    let mut sections = vec![Guidance {
        title: "Next steps",
        steps: vec![
            "Configure your SMTP credentials in .env.local",
            "Set up your Vercel KV database",
            "Add your contact form to any page using:",
        ],
        snippet: Some("import ContactForm from './app/contact/page'"),
    }];

    if is_gmail(&config.smtp_host) {
        sections.push(Guidance {
            title: "Gmail SMTP Setup",
            steps: vec![
                "Enable 2-Step Verification in your Google Account",
                "Generate an App Password at: https://myaccount.google.com/apppasswords",
                "Use your Gmail address as SMTP_USER and the App Password as SMTP_PASS",
            ],
            snippet: None,
        });
    }

    sections
}
