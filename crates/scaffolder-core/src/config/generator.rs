//! Project generator command description

use std::fmt;

/// Package runner used to invoke create-react-app
const PACKAGE_RUNNER: &str = "npx";

/// External command that bootstraps the project skeleton
///
/// The generator is run from the scaffolding root and is expected to create
/// a directory named after the project containing a `package.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGenerator {
    /// Program to execute (looked up on PATH)
    pub program: String,
    /// Positional arguments, passed through untouched
    pub args: Vec<String>,
}

impl ProjectGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `npx create-react-app <project> --template <template>`
    pub fn create_react_app(project_name: &str, template: &str) -> Self {
        Self::new(
            PACKAGE_RUNNER,
            vec![
                "create-react-app".to_string(),
                project_name.to_string(),
                "--template".to_string(),
                template.to_string(),
            ],
        )
    }

    /// Full command line for display purposes
    pub fn command_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProjectGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
