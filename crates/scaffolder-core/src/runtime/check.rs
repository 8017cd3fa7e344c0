//! Runtime detection for the tools the generator needs

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// One-line description for progress output
    pub fn describe(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Run `<program> --version` and capture the trimmed output
fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npx is available
pub fn check_npx() -> RuntimeInfo {
    probe("npx", "npx")
}

/// Check an arbitrary generator program
pub fn check_program(program: &str) -> RuntimeInfo {
    let name: &'static str = match program {
        "node" => "Node.js",
        "npx" => "npx",
        _ => "generator",
    };
    probe(name, program)
}

/// Probe Node.js and the generator program.
///
/// Results are advisory: a missing runtime is reported, never raised, since
/// the generator step is skipped when the project directory already exists.
pub fn check_runtimes(generator_program: &str) -> Vec<RuntimeInfo> {
    let mut results = vec![check_node()];
    if generator_program == "npx" {
        results.push(check_npx());
    } else if generator_program != "node" {
        results.push(check_program(generator_program));
    }
    results
}

/// Summarize missing runtimes, if any
pub fn missing_runtimes(results: &[RuntimeInfo]) -> Option<String> {
    let missing: Vec<&str> = results
        .iter()
        .filter(|r| !r.available)
        .map(|r| r.name)
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!(
            "Missing runtimes: {} (install Node.js from https://nodejs.org)",
            missing.join(", ")
        ))
    }
}
