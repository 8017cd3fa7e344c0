//! Scaffolding workflow
//!
//! [`Scaffolder`] runs the fixed sequence for one product:
//! bootstrap → directories → manifest → template files → instructions.
//! Each step is public so the TUI can report progress between them; the
//! first error aborts the sequence and nothing already written is undone.

use crate::error::Result;
use crate::product::ProductConfig;
use crate::runtime::ToolManager;
use crate::templates::{self, MergeSummary};
use std::path::{Path, PathBuf};

/// What happened during the bootstrap step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// The generator ran and exited successfully
    Generated,
    /// The project directory already existed, so the generator was not run
    Skipped,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub bootstrap: Bootstrap,
    pub directories: Vec<PathBuf>,
    pub dependencies: MergeSummary,
    pub files: Vec<PathBuf>,
}

/// Drives the scaffolding steps for a product under a root directory
pub struct Scaffolder<'a, C: ProductConfig> {
    config: &'a C,
    root: PathBuf,
}

impl<'a, C: ProductConfig> Scaffolder<'a, C> {
    /// Scaffold into `root/<product name>`
    pub fn new(config: &'a C, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    /// Scaffold relative to the process working directory
    pub fn in_current_dir(config: &'a C) -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(config, root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root.join(self.config.name())
    }

    /// Run the generator unless the project directory already exists
    pub async fn bootstrap(&self) -> Result<Bootstrap> {
        if self.project_dir().exists() {
            return Ok(Bootstrap::Skipped);
        }

        ToolManager::new(self.config.generator())
            .run(&self.root)
            .await?;
        Ok(Bootstrap::Generated)
    }

    pub async fn create_directories(&self) -> Result<Vec<PathBuf>> {
        templates::create_directories(&self.project_dir(), self.config.directories()).await
    }

    pub async fn patch_manifest(&self) -> Result<MergeSummary> {
        templates::patch_manifest(&self.project_dir(), self.config.dependencies()).await
    }

    pub async fn write_files(&self) -> Result<Vec<PathBuf>> {
        templates::write_template_files(&self.project_dir(), self.config.files()).await
    }

    /// Closing instructions, printed verbatim to stdout
    pub fn instructions(&self) -> String {
        format_instructions(&self.config.next_steps(), self.config.dev_server_url())
    }

    /// Run every step in order without any progress output
    pub async fn run(&self) -> Result<ScaffoldReport> {
        let bootstrap = self.bootstrap().await?;
        let directories = self.create_directories().await?;
        let dependencies = self.patch_manifest().await?;
        let files = self.write_files().await?;

        Ok(ScaffoldReport {
            bootstrap,
            directories,
            dependencies,
            files,
        })
    }
}

/// Numbered next steps followed by the dev server address
pub fn format_instructions(steps: &[String], dev_server_url: &str) -> String {
    let mut out =
        String::from("\nProject setup complete! Follow these steps to start developing:\n");
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
    out.push_str(&format!(
        "\nThe development server will start at {}",
        dev_server_url
    ));
    out
}
