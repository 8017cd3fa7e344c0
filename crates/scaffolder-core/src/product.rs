//! Product configuration trait for scaffolding binaries
//!
//! Everything specific to one scaffolded project (its name, the generator
//! that bootstraps it, the files written on top) lives behind this trait so
//! the core stays product-agnostic.

use crate::config::ProjectGenerator;
use crate::templates::{Dependency, TemplateFile};

/// Configuration trait for scaffolded products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Project directory name created by the generator
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Command that bootstraps the project skeleton
    fn generator(&self) -> ProjectGenerator;

    /// Directories ensured under the project root, relative paths
    fn directories(&self) -> &'static [&'static str];

    /// Dependencies merged into package.json, in insertion order
    fn dependencies(&self) -> &'static [Dependency];

    /// Files written verbatim, in order
    fn files(&self) -> &'static [TemplateFile];

    /// Shell commands to run after setup
    fn next_steps(&self) -> Vec<String>;

    /// URL the development server listens on
    fn dev_server_url(&self) -> &'static str;

    /// Minimum Node.js version the generator supports
    fn min_node_version(&self) -> &'static str {
        "14.0.0"
    }
}
