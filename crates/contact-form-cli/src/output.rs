//! Terminal output formatting for the contact-form CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use console::style;

use contact_form_core::guidance::Guidance;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a warning message prefixed with yellow `[WARN]`.
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// Print an error message prefixed with red `[ERROR]` to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Print an indented underlying cause beneath an error.
pub fn print_cause(text: &str) {
    eprintln!("  {} {}", style("caused by:").red(), text);
}

/// Print a progress step indicator like `[1/3] Creating directories...`.
pub fn print_step(step: usize, total: usize, text: &str) {
    println!(
        "{} {}...",
        style(format!("[{step}/{total}]")).dim(),
        text
    );
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print a guidance section: yellow title, numbered steps, optional cyan snippet.
pub fn print_guidance(section: &Guidance) {
    println!("\n{}", style(format!("{}:", section.title)).yellow().bold());
    for (i, line) in section.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, line);
    }
    if let Some(snippet) = section.snippet {
        println!("\n    {}\n", style(snippet).cyan());
    }
}
