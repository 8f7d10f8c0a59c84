//! The `init` scaffold: an ordered list of idempotent steps.
//!
//! ```text
//! EnsureDirectories -> RenderAndWrite -> AppendEnv -> [InstallDependencies]
//! ```
//!
//! Steps run strictly in order and the first error aborts the rest. Nothing is
//! rolled back: files written before the failure stay on disk. Re-running is
//! safe for the generated files (they are overwritten) but appends the
//! environment block again.

use std::path::{Path, PathBuf};

use crate::config::FormConfig;
use crate::error::Result;
use crate::guidance::{self, Guidance};
use crate::installer::{DependencyInstaller, REQUIRED_PACKAGES};
use crate::project::{self, RenderedFile, ScaffoldDirs, ENV_FILE};
use crate::templates::renderer;
use crate::templates::store::{TemplateKind, TemplateStore};

/// One stage of the scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    EnsureDirectories,
    RenderAndWrite,
    AppendEnv,
    InstallDependencies,
}

impl Step {
    /// Progress line shown while the step runs.
    pub fn label(self) -> &'static str {
        match self {
            Self::EnsureDirectories => "Creating directories",
            Self::RenderAndWrite => "Creating files",
            Self::AppendEnv => "Creating environment variables",
            Self::InstallDependencies => "Installing dependencies",
        }
    }
}

/// The steps a run with `config` will execute, in order.
pub fn plan(config: &FormConfig) -> Vec<Step> {
    let mut steps = vec![Step::EnsureDirectories, Step::RenderAndWrite, Step::AppendEnv];
    if config.install_dependencies {
        steps.push(Step::InstallDependencies);
    }
    steps
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// Generated files, in write order.
    pub files: Vec<PathBuf>,
    pub env_file: PathBuf,
    /// Installer command line, when dependencies were installed.
    pub installed_with: Option<String>,
    pub guidance: Vec<Guidance>,
}

/// Runs the scaffold steps against a project root.
pub struct Scaffolder<'a> {
    root: PathBuf,
    store: &'a TemplateStore,
    installer: &'a dyn DependencyInstaller,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        root: &Path,
        store: &'a TemplateStore,
        installer: &'a dyn DependencyInstaller,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            store,
            installer,
        }
    }

    /// Render the two generated files for `config`.
    ///
    /// Both templates are loaded before anything is written, so a bad template
    /// directory fails before the project is touched.
    pub fn render(&self, config: &FormConfig) -> Result<Vec<RenderedFile>> {
        let dirs = ScaffoldDirs::under(&self.root);
        let route = self.store.load(TemplateKind::ApiRoute)?;
        let page = self.store.load(TemplateKind::ContactPage)?;

        Ok(vec![
            RenderedFile {
                destination: dirs.route_path(),
                content: renderer::render(&route, Some(config)),
            },
            RenderedFile {
                destination: dirs.page_path(),
                content: renderer::render(&page, None),
            },
        ])
    }

    /// Render the environment block for `config`.
    pub fn render_env(&self, config: &FormConfig) -> Result<String> {
        let block = self.store.load(TemplateKind::EnvBlock)?;
        Ok(renderer::render(&block, Some(config)))
    }

    /// Execute every planned step. `on_step(index, total, step)` is called
    /// before each step starts, with a 1-based index.
    pub async fn run<F>(&self, config: &FormConfig, mut on_step: F) -> Result<ScaffoldReport>
    where
        F: FnMut(usize, usize, Step),
    {
        let steps = plan(config);
        let total = steps.len();
        let env_file = self.root.join(ENV_FILE);
        let mut files = Vec::new();
        let mut installed_with = None;

        for (index, step) in steps.into_iter().enumerate() {
            on_step(index + 1, total, step);
            tracing::info!("step {}/{total}: {}", index + 1, step.label());

            match step {
                Step::EnsureDirectories => {
                    project::ensure_scaffold(&self.root)?;
                }
                Step::RenderAndWrite => {
                    for file in self.render(config)? {
                        project::write_rendered(&file)?;
                        files.push(file.destination);
                    }
                }
                Step::AppendEnv => {
                    project::append_env(&env_file, &self.render_env(config)?)?;
                }
                Step::InstallDependencies => {
                    self.installer.install(&REQUIRED_PACKAGES).await?;
                    installed_with = Some(self.installer.describe(&REQUIRED_PACKAGES));
                }
            }
        }

        Ok(ScaffoldReport {
            files,
            env_file,
            installed_with,
            guidance: guidance::next_steps(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::config::FormSubmission;
    use crate::error::ContactFormError;
    use crate::templates::embedded;

    /// Records install calls and optionally fails them.
    #[derive(Default)]
    struct RecordingInstaller {
        calls: Mutex<Vec<Vec<String>>>,
        fail: bool,
    }

    impl RecordingInstaller {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl DependencyInstaller for RecordingInstaller {
        fn describe(&self, packages: &[&str]) -> String {
            format!("fake add {}", packages.join(" "))
        }

        async fn install(&self, packages: &[&str]) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(packages.iter().map(|p| p.to_string()).collect());
            if self.fail {
                return Err(ContactFormError::DependencyInstall {
                    command: self.describe(packages),
                    code: Some(1),
                });
            }
            Ok(())
        }
    }

    fn config(smtp_host: &str, install_dependencies: bool) -> FormConfig {
        FormConfig {
            email_to: "test@example.com".into(),
            smtp_host: smtp_host.into(),
            smtp_port: "587".into(),
            install_dependencies,
        }
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_plan_includes_install_only_when_requested() {
        assert_eq!(
            plan(&config("smtp.gmail.com", false)),
            vec![Step::EnsureDirectories, Step::RenderAndWrite, Step::AppendEnv]
        );
        assert_eq!(
            plan(&config("smtp.gmail.com", true)).last(),
            Some(&Step::InstallDependencies)
        );
    }

    #[tokio::test]
    async fn test_run_writes_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::Embedded;
        let installer = RecordingInstaller::default();
        let scaffolder = Scaffolder::new(dir.path(), &store, &installer);

        let mut seen = Vec::new();
        let report = scaffolder
            .run(&config("smtp.other.com", false), |i, total, step| {
                seen.push((i, total, step))
            })
            .await
            .unwrap();

        assert_eq!(
            seen,
            vec![
                (1, 3, Step::EnsureDirectories),
                (2, 3, Step::RenderAndWrite),
                (3, 3, Step::AppendEnv),
            ]
        );
        assert_eq!(
            report.files,
            vec![
                dir.path().join("app/api/send/route.ts"),
                dir.path().join("app/contact/page.tsx"),
            ]
        );

        let route = read(&report.files[0]);
        assert!(route.contains("to: 'test@example.com'"));
        assert!(route.contains("'smtp.other.com'"));
        assert!(!route.contains("{{EMAIL_TO}}"));
        assert_eq!(read(&report.files[1]), embedded::CONTACT_PAGE);

        let env = read(&report.env_file);
        assert!(env.starts_with("# Contact Form Configuration"));
        assert!(env.contains("SMTP_HOST=smtp.other.com\nSMTP_PORT=587\n"));
        for key in [
            "SMTP_USER=",
            "SMTP_PASS=",
            "SMTP_FROM=",
            "KV_REST_API_URL=",
            "KV_REST_API_TOKEN=",
        ] {
            assert!(env.contains(key), "{key} missing");
        }

        assert_eq!(installer.call_count(), 0);
        assert!(report.installed_with.is_none());
    }

    #[tokio::test]
    async fn test_second_run_overwrites_files_and_appends_env() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::Embedded;
        let installer = RecordingInstaller::default();
        let scaffolder = Scaffolder::new(dir.path(), &store, &installer);
        let cfg = config("smtp.other.com", false);

        let first = scaffolder.run(&cfg, |_, _, _| {}).await.unwrap();
        let route_once = read(&first.files[0]);
        let page_once = read(&first.files[1]);
        let env_once = read(&first.env_file);

        let second = scaffolder.run(&cfg, |_, _, _| {}).await.unwrap();
        assert_eq!(read(&second.files[0]), route_once);
        assert_eq!(read(&second.files[1]), page_once);

        let env_twice = read(&second.env_file);
        assert_eq!(env_twice, format!("{env_once}\n{env_once}"));
        assert_eq!(env_twice.matches("# Contact Form Configuration").count(), 2);
    }

    #[tokio::test]
    async fn test_run_installs_required_packages() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::Embedded;
        let installer = RecordingInstaller::default();
        let scaffolder = Scaffolder::new(dir.path(), &store, &installer);

        let report = scaffolder
            .run(&config("smtp.gmail.com", true), |_, _, _| {})
            .await
            .unwrap();

        assert_eq!(
            *installer.calls.lock().unwrap(),
            vec![vec!["nodemailer".to_string(), "@vercel/kv".to_string()]]
        );
        assert_eq!(
            report.installed_with.as_deref(),
            Some("fake add nodemailer @vercel/kv")
        );
    }

    #[tokio::test]
    async fn test_install_failure_keeps_written_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::Embedded;
        let installer = RecordingInstaller::failing();
        let scaffolder = Scaffolder::new(dir.path(), &store, &installer);

        let result = scaffolder.run(&config("smtp.gmail.com", true), |_, _, _| {}).await;

        assert!(matches!(
            result,
            Err(ContactFormError::DependencyInstall { code: Some(1), .. })
        ));
        assert!(dir.path().join("app/api/send/route.ts").is_file());
        assert!(dir.path().join("app/contact/page.tsx").is_file());
        assert!(dir.path().join(".env.local").is_file());
    }

    #[tokio::test]
    async fn test_directory_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app"), "blocks app/").unwrap();
        let store = TemplateStore::Embedded;
        let installer = RecordingInstaller::default();
        let scaffolder = Scaffolder::new(dir.path(), &store, &installer);

        let mut seen = Vec::new();
        let result = scaffolder
            .run(&config("smtp.gmail.com", true), |_, _, step| seen.push(step))
            .await;

        assert!(matches!(result, Err(ContactFormError::CreateDir { .. })));
        assert_eq!(seen, vec![Step::EnsureDirectories]);
        assert!(!dir.path().join(".env.local").exists());
        assert_eq!(read(&dir.path().join("app")), "blocks app/");
        assert_eq!(installer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_template_directory_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let templates = tempfile::tempdir().unwrap();
        let store = TemplateStore::Directory(templates.path().to_path_buf());
        let installer = RecordingInstaller::default();
        let scaffolder = Scaffolder::new(dir.path(), &store, &installer);

        let result = scaffolder.run(&config("smtp.other.com", false), |_, _, _| {}).await;

        assert!(matches!(result, Err(ContactFormError::TemplateRead { .. })));
        assert!(!dir.path().join("app/api/send/route.ts").exists());
        assert!(!dir.path().join(".env.local").exists());
    }

    #[tokio::test]
    async fn test_report_guidance_follows_smtp_host() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::Embedded;
        let installer = RecordingInstaller::default();
        let scaffolder = Scaffolder::new(dir.path(), &store, &installer);

        let gmail = scaffolder
            .run(&config("smtp.gmail.com", false), |_, _, _| {})
            .await
            .unwrap();
        assert!(gmail.guidance.iter().any(|g| g.title == "Gmail SMTP Setup"));

        let other = scaffolder
            .run(&config("smtp.other.com", false), |_, _, _| {})
            .await
            .unwrap();
        assert!(other.guidance.iter().all(|g| !g.title.contains("Gmail")));
    }

    #[test]
    fn test_generated_files_agree_on_submission_fields() {
        let fields = serde_json::to_value(FormSubmission::default()).unwrap();
        let fields = fields.as_object().unwrap();
        assert_eq!(fields.len(), 5);

        for field in fields.keys() {
            assert!(
                embedded::CONTACT_PAGE.contains(&format!("name=\"{field}\"")),
                "form has no input named {field}"
            );
            assert!(
                embedded::API_ROUTE.contains(&format!("data.{field}")),
                "route ignores {field}"
            );
        }
    }

    #[test]
    fn test_route_keeps_rate_limit_contract() {
        let route = embedded::API_ROUTE;
        assert!(route.contains("x-forwarded-for"));
        assert!(route.contains("RATE_LIMIT_MAX_REQUESTS = 50"));
        assert!(route.contains("RATE_LIMIT_WINDOW_SECONDS = 86400"));
        assert!(route.contains("status: 429"));
        assert!(route.contains("status: 500"));
    }
}
