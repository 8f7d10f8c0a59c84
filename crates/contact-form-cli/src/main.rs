//! contact-form CLI: adds a contact form to a Next.js project.
//!
//! `contact-form init` asks a few questions, then writes an API route that
//! mails submissions, a form component, and `.env.local` stubs. All the work
//! happens in [`contact_form_core`]; this crate handles prompts and output.

mod commands;
mod output;
mod prompt;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "contact-form",
    about = "CLI tool for adding contact form functionality to Next.js projects",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read templates from this directory instead of the built-in ones
    #[arg(long, global = true, env = "CONTACT_FORM_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize contact form components and API route
    Init,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Init => commands::init::run(cli.templates.as_deref()).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err.to_string());
            for cause in err.chain().skip(1) {
                output::print_cause(&cause.to_string());
            }
            ExitCode::from(1)
        }
    }
}
