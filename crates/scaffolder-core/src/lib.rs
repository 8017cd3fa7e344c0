//! Scaffolder Core - Shared library for front-end project scaffolding
//!
//! A product binary describes what to scaffold through [`ProductConfig`];
//! this crate bootstraps the project with an external generator, ensures
//! extra directories, merges dependencies into `package.json` and writes
//! static template files on top.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - generator execution, directory creation,
//!   manifest merging, template writing, runtime detection
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and `Scaffolder`
//! - **Layer 3: CLI Output** - optional cliclack-based progress (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based progress module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{ProductConfig, Scaffolder};
//!
//! let report = Scaffolder::in_current_dir(&MyConfig).run().await?;
//! println!("{}", Scaffolder::in_current_dir(&MyConfig).instructions());
//! ```

pub mod config;
pub mod error;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ProjectGenerator;
pub use error::{Result, ScaffoldError};
pub use product::ProductConfig;
pub use runtime::{check_runtimes, RuntimeInfo, ToolManager};
pub use scaffold::{format_instructions, Bootstrap, ScaffoldReport, Scaffolder};
pub use templates::{Dependency, MergeSummary, PackageManifest, TemplateFile};

#[cfg(feature = "tui")]
pub use tui::run;
