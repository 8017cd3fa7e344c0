//! Project file operations
//!
//! This module provides:
//! - Directory creation and verbatim template writing
//! - package.json dependency merging
//! - Version checks for detected runtimes

pub mod copier;
pub mod manifest;
pub mod version;

pub use copier::{create_directories, write_template_files, TemplateFile};
pub use manifest::{patch_manifest, Dependency, MergeSummary, PackageManifest, MANIFEST_FILE};
pub use version::check_node_compatibility;
