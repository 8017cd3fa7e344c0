//! package.json loading and dependency merging

use crate::error::{Result, ScaffoldError};
use semver::VersionReq;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name of the manifest inside the project directory
pub const MANIFEST_FILE: &str = "package.json";

const DEPENDENCIES_KEY: &str = "dependencies";

/// A dependency entry to merge into the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    /// npm package name
    pub name: &'static str,
    /// Version constraint (e.g. `^1.6.7`)
    pub version: &'static str,
}

impl Dependency {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }

    /// Check that the constraint is a valid semver requirement
    pub fn validate(&self) -> Result<()> {
        VersionReq::parse(self.version)
            .map(|_| ())
            .map_err(|source| ScaffoldError::InvalidConstraint {
                name: self.name.to_string(),
                constraint: self.version.to_string(),
                source,
            })
    }
}

/// Outcome of a dependency merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Keys that were not present before
    pub added: Vec<String>,
    /// Keys that existed and were overwritten
    pub updated: Vec<String>,
}

impl MergeSummary {
    pub fn total(&self) -> usize {
        self.added.len() + self.updated.len()
    }
}

/// In-memory package.json, key order preserved
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl PackageManifest {
    /// Read and parse the manifest at `path`
    pub async fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScaffoldError::ManifestNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(ScaffoldError::ManifestRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::parse(path, &content)
    }

    /// Parse manifest text; `path` is only used for error reporting and saving
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ScaffoldError::ManifestParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        match value {
            Value::Object(document) => Ok(Self {
                path: path.to_path_buf(),
                document,
            }),
            _ => Err(ScaffoldError::ManifestParse {
                path: path.to_path_buf(),
                message: "top-level value is not an object".to_string(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current dependency constraint for `name`, if it is a string
    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.document
            .get(DEPENDENCIES_KEY)
            .and_then(Value::as_object)
            .and_then(|deps| deps.get(name))
            .and_then(Value::as_str)
    }

    /// Insert or overwrite each dependency, leaving every other entry alone.
    ///
    /// A missing `dependencies` table is created at the end of the document.
    pub fn merge_dependencies(&mut self, dependencies: &[Dependency]) -> Result<MergeSummary> {
        let path = self.path.clone();
        let deps = self
            .document
            .entry(DEPENDENCIES_KEY)
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| ScaffoldError::ManifestParse {
                path,
                message: format!("\"{}\" is not an object", DEPENDENCIES_KEY),
            })?;

        let mut summary = MergeSummary::default();
        for dep in dependencies {
            let value = Value::String(dep.version.to_string());
            let previous = deps.insert(dep.name.to_string(), value);
            if previous.is_some() {
                summary.updated.push(dep.name.to_string());
            } else {
                summary.added.push(dep.name.to_string());
            }
        }

        Ok(summary)
    }

    /// Serialize with two-space indentation
    pub fn to_pretty_string(&self) -> String {
        // Serializing a Map of Values cannot fail
        serde_json::to_string_pretty(&self.document).unwrap_or_default()
    }

    /// Write the manifest back to where it was loaded from
    pub async fn save(&self) -> Result<()> {
        fs::write(&self.path, self.to_pretty_string())
            .await
            .map_err(|source| ScaffoldError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

/// Validate constraints, then load, merge and save the manifest in `project_dir`
pub async fn patch_manifest(
    project_dir: &Path,
    dependencies: &[Dependency],
) -> Result<MergeSummary> {
    for dep in dependencies {
        dep.validate()?;
    }

    let path = project_dir.join(MANIFEST_FILE);
    let mut manifest = PackageManifest::load(&path).await?;
    let summary = manifest.merge_dependencies(dependencies)?;
    manifest.save().await?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPS: &[Dependency] = &[
        Dependency::new("axios", "^1.6.7"),
        Dependency::new("lucide-react", "^0.330.0"),
    ];

    const GENERATED: &str = r#"{
  "name": "chat-frontend",
  "version": "0.1.0",
  "private": true,
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0",
    "typescript": "^4.9.5"
  },
  "scripts": {
    "start": "react-scripts start"
  }
}"#;

    fn parse(content: &str) -> PackageManifest {
        PackageManifest::parse(Path::new("package.json"), content).unwrap()
    }

    #[test]
    fn test_merge_adds_new_keys_and_keeps_existing() {
        let mut manifest = parse(GENERATED);
        let summary = manifest.merge_dependencies(DEPS).unwrap();

        assert_eq!(summary.added, vec!["axios", "lucide-react"]);
        assert!(summary.updated.is_empty());
        assert_eq!(manifest.dependency("react"), Some("^18.2.0"));
        assert_eq!(manifest.dependency("react-dom"), Some("^18.2.0"));
        assert_eq!(manifest.dependency("typescript"), Some("^4.9.5"));
        assert_eq!(manifest.dependency("axios"), Some("^1.6.7"));
        assert_eq!(manifest.dependency("lucide-react"), Some("^0.330.0"));
    }

    #[test]
    fn test_merge_overwrites_existing_key() {
        let mut manifest =
            parse(r#"{"dependencies": {"axios": "^0.21.0", "react": "^18.2.0"}}"#);
        let summary = manifest.merge_dependencies(DEPS).unwrap();

        assert_eq!(summary.updated, vec!["axios"]);
        assert_eq!(summary.added, vec!["lucide-react"]);
        assert_eq!(summary.total(), 2);
        assert_eq!(manifest.dependency("axios"), Some("^1.6.7"));
        assert_eq!(manifest.dependency("react"), Some("^18.2.0"));
    }

    #[test]
    fn test_merge_preserves_key_order() {
        let mut manifest = parse(GENERATED);
        manifest.merge_dependencies(DEPS).unwrap();
        let out = manifest.to_pretty_string();

        let name = out.find("\"name\"").unwrap();
        let deps = out.find("\"dependencies\"").unwrap();
        let scripts = out.find("\"scripts\"").unwrap();
        assert!(name < deps && deps < scripts);

        let typescript = out.find("\"typescript\"").unwrap();
        let axios = out.find("\"axios\"").unwrap();
        assert!(typescript < axios);
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let manifest = parse(r#"{"name":"x","dependencies":{"react":"^18.2.0"}}"#);
        assert_eq!(
            manifest.to_pretty_string(),
            "{\n  \"name\": \"x\",\n  \"dependencies\": {\n    \"react\": \"^18.2.0\"\n  }\n}"
        );
    }

    #[test]
    fn test_missing_dependencies_table_is_created() {
        let mut manifest = parse(r#"{"name": "x"}"#);
        manifest.merge_dependencies(DEPS).unwrap();
        assert_eq!(manifest.dependency("axios"), Some("^1.6.7"));
    }

    #[test]
    fn test_non_object_dependencies_rejected() {
        let mut manifest = parse(r#"{"dependencies": ["react"]}"#);
        let err = manifest.merge_dependencies(DEPS).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = PackageManifest::parse(Path::new("package.json"), "{ not json").unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
    }

    #[test]
    fn test_top_level_array_rejected() {
        let err = PackageManifest::parse(Path::new("package.json"), "[]").unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn test_invalid_constraint_rejected() {
        let dep = Dependency::new("axios", "latest-and-greatest");
        assert!(matches!(
            dep.validate(),
            Err(ScaffoldError::InvalidConstraint { .. })
        ));
        assert!(Dependency::new("axios", "^1.6.7").validate().is_ok());
    }

    #[tokio::test]
    async fn test_patch_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = patch_manifest(dir.path(), DEPS).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestNotFound { .. }));
    }

    #[tokio::test]
    async fn test_patch_invalid_constraint_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, GENERATED).unwrap();

        let bad = [Dependency::new("axios", "not a version")];
        assert!(patch_manifest(dir.path(), &bad).await.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), GENERATED);
    }

    #[tokio::test]
    async fn test_patch_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, GENERATED).unwrap();

        let summary = patch_manifest(dir.path(), DEPS).await.unwrap();
        assert_eq!(summary.added.len(), 2);

        let reloaded = PackageManifest::load(&path).await.unwrap();
        assert_eq!(reloaded.dependency("axios"), Some("^1.6.7"));
        assert_eq!(reloaded.dependency("react"), Some("^18.2.0"));
    }
}
