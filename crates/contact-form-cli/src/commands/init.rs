use std::path::Path;

use anyhow::{Context, Result};

use contact_form_core::config::collect_config;
use contact_form_core::installer::{DependencyInstaller, PackageManagerInstaller, REQUIRED_PACKAGES};
use contact_form_core::project;
use contact_form_core::scaffold::{ScaffoldReport, Scaffolder, Step};
use contact_form_core::templates::store::TemplateStore;

use crate::output;
use crate::prompt::TerminalPrompter;

/// Add the contact form to the project in the current directory.
///
/// Asks for the recipient address and SMTP settings, creates the API route
/// and form component under `app/`, appends SMTP/KV stubs to `.env.local`,
/// and optionally installs `nodemailer` and `@vercel/kv`.
pub async fn run(templates: Option<&Path>) -> Result<()> {
    output::print_header("Setting up contact form");

    let root = std::env::current_dir().context("cannot determine the current directory")?;
    if !project::has_package_json(&root) {
        output::print_warning(&format!(
            "No package.json in {}; run this from the root of your Next.js project",
            root.display()
        ));
    }

    let config = collect_config(&mut TerminalPrompter)?;
    tracing::debug!(?config, "configuration collected");

    let store = TemplateStore::from_override(templates);
    let installer = PackageManagerInstaller::new(&root);
    let scaffolder = Scaffolder::new(&root, &store, &installer);

    println!();
    let report = scaffolder
        .run(&config, |index, total, step| {
            output::print_step(index, total, step.label());
            if step == Step::InstallDependencies {
                output::print_key_value("Command", &installer.describe(&REQUIRED_PACKAGES));
            }
        })
        .await
        .context("Error setting up contact form")?;

    print_report(&root, &report);
    Ok(())
}

fn print_report(root: &Path, report: &ScaffoldReport) {
    println!();
    output::print_success("Contact form setup completed successfully!");
    for file in &report.files {
        output::print_key_value("Created", &relative(root, file));
    }
    output::print_key_value("Updated", &relative(root, &report.env_file));
    if let Some(command) = &report.installed_with {
        output::print_key_value("Installed", command);
    }

    for section in &report.guidance {
        output::print_guidance(section);
    }
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
