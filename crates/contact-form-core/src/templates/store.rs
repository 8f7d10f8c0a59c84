//! Template lookup: embedded assets or a directory override.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::{ContactFormError, Result};

use super::embedded;

/// The templates a scaffold run needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    ApiRoute,
    ContactPage,
    EnvBlock,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::ApiRoute, Self::ContactPage, Self::EnvBlock];

    /// Path of the template inside a template directory.
    pub fn relative_path(self) -> &'static str {
        match self {
            Self::ApiRoute => "api/send/route.ts.tmpl",
            Self::ContactPage => "contact/page.tsx.tmpl",
            Self::EnvBlock => "env/env.local.tmpl",
        }
    }

    fn embedded(self) -> &'static str {
        match self {
            Self::ApiRoute => embedded::API_ROUTE,
            Self::ContactPage => embedded::CONTACT_PAGE,
            Self::EnvBlock => embedded::ENV_BLOCK,
        }
    }
}

/// Where template text comes from.
#[derive(Debug, Clone, Default)]
pub enum TemplateStore {
    /// Templates compiled into the binary.
    #[default]
    Embedded,
    /// Templates read from `<dir>/<kind.relative_path()>` at load time.
    Directory(PathBuf),
}

impl TemplateStore {
    /// Use `dir` when given, the embedded templates otherwise.
    pub fn from_override(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => Self::Directory(dir.to_path_buf()),
            None => Self::Embedded,
        }
    }

    /// Load the text of one template.
    ///
    /// Embedded templates cannot fail. A directory store fails with
    /// [`ContactFormError::TemplateRead`] when the file is missing or unreadable.
    pub fn load(&self, kind: TemplateKind) -> Result<Cow<'static, str>> {
        match self {
            Self::Embedded => Ok(Cow::Borrowed(kind.embedded())),
            Self::Directory(dir) => {
                let path = dir.join(kind.relative_path());
                tracing::debug!("reading template {}", path.display());
                std::fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| ContactFormError::TemplateRead { path, source })
            }
        }
    }
}
