//! Directory creation and template file writing

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// A file whose full content is embedded in the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the project root, `/`-separated
    pub path: &'static str,
    /// Exact content to write
    pub contents: &'static str,
}

impl TemplateFile {
    pub const fn new(path: &'static str, contents: &'static str) -> Self {
        Self { path, contents }
    }
}

/// Ensure each directory (and its parents) exists under `project_dir`
pub async fn create_directories(
    project_dir: &Path,
    directories: &[&str],
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(directories.len());

    for dir in directories {
        let full_path = project_dir.join(dir);
        fs::create_dir_all(&full_path)
            .await
            .map_err(|source| ScaffoldError::CreateDir {
                path: full_path.clone(),
                source,
            })?;
        created.push(full_path);
    }

    Ok(created)
}

/// Write every template file verbatim, in order, overwriting existing files.
///
/// Parent directories are not created: a missing parent is a write error.
pub async fn write_template_files(
    project_dir: &Path,
    files: &[TemplateFile],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let target_path = project_dir.join(file.path);
        fs::write(&target_path, file.contents)
            .await
            .map_err(|source| ScaffoldError::Write {
                path: target_path.clone(),
                source,
            })?;
        written.push(target_path);
    }

    Ok(written)
}
