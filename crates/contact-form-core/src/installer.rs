//! Dependency installation through the host project's package manager.
//!
//! The orchestrator only sees the [`DependencyInstaller`] trait. The real
//! implementation, [`PackageManagerInstaller`], spawns the package manager with
//! the parent's stdin/stdout/stderr so progress shows live, and waits for it.
//! There is no timeout and no retry.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{ContactFormError, Result};

/// Packages the generated route imports.
pub const REQUIRED_PACKAGES: [&str; 2] = ["nodemailer", "@vercel/kv"];

/// Installs packages into the host project.
#[async_trait]
pub trait DependencyInstaller: Send + Sync {
    /// The command line that [`install`](Self::install) will run, for display.
    fn describe(&self, packages: &[&str]) -> String;

    /// Install `packages`, blocking until the package manager exits.
    async fn install(&self, packages: &[&str]) -> Result<()>;
}

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Pick the package manager from the lockfile in `root`, defaulting to npm.
    pub fn detect(root: &Path) -> Self {
        const LOCKFILES: [(&str, PackageManager); 4] = [
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("yarn.lock", PackageManager::Yarn),
            ("bun.lockb", PackageManager::Bun),
            ("bun.lock", PackageManager::Bun),
        ];

        LOCKFILES
            .iter()
            .find(|(lockfile, _)| root.join(lockfile).is_file())
            .map(|(_, manager)| *manager)
            .unwrap_or(PackageManager::Npm)
    }

    pub fn binary(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Subcommand that adds packages to `package.json`.
    pub fn add_subcommand(self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        }
    }

    pub fn install_hint(self) -> &'static str {
        match self {
            Self::Npm => "https://nodejs.org/",
            Self::Pnpm => "npm install -g pnpm",
            Self::Yarn => "npm install -g yarn",
            Self::Bun => "https://bun.sh/",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Runs `<manager> <add> <packages...>` in the project root.
pub struct PackageManagerInstaller {
    manager: PackageManager,
    project_dir: PathBuf,
}

impl PackageManagerInstaller {
    /// Create an installer for `project_dir`, choosing the package manager from its lockfile.
    pub fn new(project_dir: &Path) -> Self {
        Self {
            manager: PackageManager::detect(project_dir),
            project_dir: project_dir.to_path_buf(),
        }
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// Locate the package manager binary on `PATH`.
    fn binary(&self) -> Result<PathBuf> {
        which::which(self.manager.binary()).map_err(|_| ContactFormError::MissingTool {
            name: self.manager.binary().into(),
            install: self.manager.install_hint().into(),
        })
    }
}

#[async_trait]
impl DependencyInstaller for PackageManagerInstaller {
    fn describe(&self, packages: &[&str]) -> String {
        command_line(self.manager, packages)
    }

    async fn install(&self, packages: &[&str]) -> Result<()> {
        let binary = self.binary()?;
        let command = self.describe(packages);
        tracing::info!("running `{command}` in {}", self.project_dir.display());

        let status = Command::new(&binary)
            .arg(self.manager.add_subcommand())
            .args(packages)
            .current_dir(&self.project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        if !status.success() {
            return Err(ContactFormError::DependencyInstall {
                command,
                code: status.code(),
            });
        }

        Ok(())
    }
}

fn command_line(manager: PackageManager, packages: &[&str]) -> String {
    let mut parts = vec![manager.binary(), manager.add_subcommand()];
    parts.extend_from_slice(packages);
    parts.join(" ")
}
