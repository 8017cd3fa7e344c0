//! Version comparison for detected runtimes

use anyhow::Result;
use semver::Version;

/// Compare a detected Node.js version against the product minimum.
/// Returns a warning message if the runtime is older than required.
pub fn check_node_compatibility(detected: &str, minimum: &str) -> Option<String> {
    let detected_ver = match parse_version(detected) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let minimum_ver = match parse_version(minimum) {
        Ok(v) => v,
        Err(_) => return None,
    };

    if detected_ver < minimum_ver {
        Some(format!(
            "Node.js {} detected; create-react-app needs {} or newer.\n\
             Install a newer release from https://nodejs.org",
            detected, minimum
        ))
    } else {
        None
    }
}

/// Parse version string, handling a leading `v` as printed by `node --version`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
