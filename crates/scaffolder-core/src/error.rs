//! Error types for scaffolder-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using scaffolder-core's error type
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Failures that abort a scaffolding run
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The project generator could not be started or exited unsuccessfully
    #[error("Project generator `{command}` failed: {reason}")]
    SubprocessFailure { command: String, reason: String },

    /// The generator did not leave a manifest where one was expected
    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// The manifest exists but could not be read
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not a JSON object with an object-valued `dependencies`
    #[error("Invalid manifest {}: {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    /// A configured dependency carries a constraint semver cannot parse
    #[error("Invalid version constraint '{constraint}' for {name}: {source}")]
    InvalidConstraint {
        name: String,
        constraint: String,
        #[source]
        source: semver::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a template file or the manifest failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// True when the external generator is the failing step
    pub fn is_subprocess_failure(&self) -> bool {
        matches!(self, ScaffoldError::SubprocessFailure { .. })
    }
}
