//! Charm-style progress output using cliclack

use crate::product::ProductConfig;
use crate::runtime::check;
use crate::scaffold::{Bootstrap, Scaffolder};
use crate::templates::version;
use anyhow::Result;

/// Run the full scaffolding sequence with progress output
pub async fn run<C: ProductConfig>(config: &C) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let scaffolder = Scaffolder::in_current_dir(config);

    // Step 0: Advisory runtime check
    check_runtimes(config)?;

    // Step 1: Bootstrap with the external generator
    let bootstrap = report(scaffolder.bootstrap().await)?;
    match bootstrap {
        Bootstrap::Generated => cliclack::log::success(format!(
            "Generated {}",
            scaffolder.project_dir().display()
        ))?,
        Bootstrap::Skipped => cliclack::log::warning(format!(
            "{} already exists, skipping {}",
            scaffolder.project_dir().display(),
            config.generator().command_line()
        ))?,
    }

    // Step 2: Create directories
    let directories = report(scaffolder.create_directories().await)?;
    cliclack::log::step(format!("Ensured {} directories", directories.len()))?;

    // Step 3: Patch package.json
    let merged = report(scaffolder.patch_manifest().await)?;
    let mut names = merged.added.clone();
    names.extend(merged.updated.iter().cloned());
    cliclack::log::step(format!("Added dependencies: {}", names.join(", ")))?;

    // Step 4: Write template files
    let files = report(scaffolder.write_files().await)?;
    cliclack::log::success(format!(
        "Wrote {} files in {}",
        files.len(),
        scaffolder.project_dir().display()
    ))?;

    // Step 5: Show next steps
    println!("{}", scaffolder.instructions());

    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Surface a step failure through cliclack before aborting
fn report<T>(result: crate::Result<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            Err(e.into())
        }
    }
}

fn check_runtimes<C: ProductConfig>(config: &C) -> Result<()> {
    let generator = config.generator();
    let runtimes = check::check_runtimes(&generator.program);

    let runtime_info: Vec<String> = runtimes.iter().map(|r| r.describe()).collect();
    cliclack::log::info(format!("Detected runtimes: {}", runtime_info.join(", ")))?;

    if let Some(missing) = check::missing_runtimes(&runtimes) {
        cliclack::log::warning(missing)?;
    }

    let node_version = runtimes
        .iter()
        .find(|r| r.name == "Node.js")
        .and_then(|r| r.version.as_deref());
    if let Some(warning) =
        node_version.and_then(|v| version::check_node_compatibility(v, config.min_node_version()))
    {
        cliclack::log::warning(format!(
            "Version warning: {}",
            warning.lines().next().unwrap_or(&warning)
        ))?;
    }

    Ok(())
}
