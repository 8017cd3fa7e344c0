//! Running the external project generator
//!
//! The generator (create-react-app by default) owns the terminal while it
//! runs: its output and any prompts go straight to the user.

use crate::config::ProjectGenerator;
use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Manager for checking and running the generator tool
pub struct ToolManager {
    generator: ProjectGenerator,
}

impl ToolManager {
    pub fn new(generator: ProjectGenerator) -> Self {
        Self { generator }
    }

    /// Get the generator configuration
    pub fn generator(&self) -> &ProjectGenerator {
        &self.generator
    }

    /// Check if the generator program is available in PATH
    pub fn is_installed(&self) -> bool {
        std::process::Command::new("which")
            .arg(&self.generator.program)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Run the generator from `working_dir` and wait for it to exit.
    ///
    /// No timeout is applied; the generator may download packages for
    /// several minutes. Stdio is inherited rather than piped.
    pub async fn run(&self, working_dir: &Path) -> Result<()> {
        let cmd = self.generator.command_line();
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let status = TokioCommand::new(&self.generator.program)
            .args(&self.generator.args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ScaffoldError::SubprocessFailure {
                command: cmd.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            let reason = match status.code() {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            };
            Err(ScaffoldError::SubprocessFailure {
                command: cmd,
                reason,
            })
        }
    }
}
