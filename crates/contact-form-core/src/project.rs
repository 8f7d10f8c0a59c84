//! Host project layout and file I/O.
//!
//! ## Directory layout
//!
//! Everything is written relative to the project root (the working directory
//! of the `init` command):
//! ```text
//! <project>/
//! ├── .env.local               # environment block is appended here
//! └── app/
//!     ├── api/send/route.ts    # generated route handler (overwritten)
//!     └── contact/page.tsx     # generated form component (overwritten)
//! ```

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{ContactFormError, Result};

pub const API_DIR: &str = "app/api/send";
pub const CONTACT_DIR: &str = "app/contact";
pub const ROUTE_FILE: &str = "route.ts";
pub const PAGE_FILE: &str = "page.tsx";
pub const ENV_FILE: &str = ".env.local";
pub const PACKAGE_JSON: &str = "package.json";

/// Directories that hold the generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldDirs {
    pub api_dir: PathBuf,
    pub contact_dir: PathBuf,
}

impl ScaffoldDirs {
    /// Paths of the scaffold directories under `root`. Nothing is created.
    pub fn under(root: &Path) -> Self {
        Self {
            api_dir: root.join(API_DIR),
            contact_dir: root.join(CONTACT_DIR),
        }
    }

    pub fn route_path(&self) -> PathBuf {
        self.api_dir.join(ROUTE_FILE)
    }

    pub fn page_path(&self) -> PathBuf {
        self.contact_dir.join(PAGE_FILE)
    }
}

/// A file produced by rendering, waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub destination: PathBuf,
    pub content: String,
}

/// Create `app/api/send` and `app/contact` under `root`.
///
/// Existing directories are fine; running this twice is a no-op.
pub fn ensure_scaffold(root: &Path) -> Result<ScaffoldDirs> {
    let dirs = ScaffoldDirs::under(root);

    for dir in [&dirs.api_dir, &dirs.contact_dir] {
        tracing::debug!("creating directory {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|source| ContactFormError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }

    Ok(dirs)
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    tracing::debug!("writing {} ({} bytes)", path.display(), content.len());
    std::fs::write(path, content).map_err(|source| ContactFormError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a [`RenderedFile`] to its destination.
pub fn write_rendered(file: &RenderedFile) -> Result<()> {
    write_file(&file.destination, &file.content)
}

/// Append the environment block to `path`, creating the file if needed.
///
/// The block is trimmed first. Existing content is never replaced; if it does
/// not end with a newline one is added so the block starts on its own line.
pub fn append_env(path: &Path, content: &str) -> Result<()> {
    let block = content.trim();
    tracing::debug!("appending {} bytes to {}", block.len(), path.display());

    let to_error = |source| ContactFormError::AppendEnv {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(to_error)?;

    let separator = if needs_separator(&mut file).map_err(to_error)? {
        "\n"
    } else {
        ""
    };

    file.write_all(format!("{separator}{block}").as_bytes())
        .map_err(to_error)
}

/// True when the file is non-empty and its last byte is not `\n`.
fn needs_separator(file: &mut std::fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Whether `root` looks like a Node project (has a `package.json`).
pub fn has_package_json(root: &Path) -> bool {
    root.join(PACKAGE_JSON).is_file()
}
