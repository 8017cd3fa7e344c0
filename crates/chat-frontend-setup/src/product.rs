//! The chat-frontend product: generator, dependencies and template files

use scaffolder_core::{Dependency, ProductConfig, ProjectGenerator, TemplateFile};

/// Directory the generator creates and every path below is relative to
const PROJECT_NAME: &str = "chat-frontend";

const DIRECTORIES: &[&str] = &["src/components", "src/api", "src/types", "src/styles"];

// @types/axios sits in `dependencies` rather than `devDependencies`, as the
// generated project has always shipped it.
const DEPENDENCIES: &[Dependency] = &[
    Dependency::new("axios", "^1.6.7"),
    Dependency::new("@types/axios", "^0.14.0"),
    Dependency::new("lucide-react", "^0.330.0"),
];

const FILES: &[TemplateFile] = &[
    TemplateFile::new(
        "src/types/index.ts",
        include_str!("../templates/src/types/index.ts"),
    ),
    TemplateFile::new(
        "src/api/chatApi.ts",
        include_str!("../templates/src/api/chatApi.ts"),
    ),
    TemplateFile::new(
        "src/components/ChatMessage.tsx",
        include_str!("../templates/src/components/ChatMessage.tsx"),
    ),
    TemplateFile::new("src/App.tsx", include_str!("../templates/src/App.tsx")),
    TemplateFile::new("src/App.css", include_str!("../templates/src/App.css")),
];

/// Chat frontend product configuration
#[derive(Clone)]
pub struct ChatFrontendConfig;

impl ProductConfig for ChatFrontendConfig {
    fn name(&self) -> &'static str {
        PROJECT_NAME
    }

    fn display_name(&self) -> &'static str {
        "Chat Frontend"
    }

    fn generator(&self) -> ProjectGenerator {
        ProjectGenerator::create_react_app(PROJECT_NAME, "typescript")
    }

    fn directories(&self) -> &'static [&'static str] {
        DIRECTORIES
    }

    fn dependencies(&self) -> &'static [Dependency] {
        DEPENDENCIES
    }

    fn files(&self) -> &'static [TemplateFile] {
        FILES
    }

    fn next_steps(&self) -> Vec<String> {
        vec![
            format!("cd {}", PROJECT_NAME),
            "npm install".to_string(),
            "npm start".to_string(),
        ]
    }

    fn dev_server_url(&self) -> &'static str {
        "http://localhost:3000"
    }
}
