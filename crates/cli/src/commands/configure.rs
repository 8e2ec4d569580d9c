use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use configure_workflow_core::{Environment, WorkflowConfiguration, decide};
use configure_workflow_java::JavaVersionParser;
use configure_workflow_utils::{end_group, notice, set_output_with, start_group};

use crate::{
    context::CommandContext,
    options::{FormatOptions, GlobalOptions},
};

#[derive(Args, Debug)]
#[command(about = "Decide whether this run releases a tag, a snapshot, or nothing")]
pub struct ConfigureArgs {}

/// Configure the release workflow and set the step outputs
///
/// # Errors
/// Returns error if the environment is incomplete, the snapshot version cannot be
/// extracted, or the outputs cannot be written.
pub async fn handle_configure(_args: &ConfigureArgs, options: &GlobalOptions) -> Result<()> {
    let context = CommandContext::new(options.config.as_deref()).await?;
    let env = Environment::load()?;

    if let FormatOptions::Stdout = options.format {
        start_group("Debug Info");
        for line in env.debug_lines() {
            println!("{line}");
        }
        end_group();
    }

    let version_file = context.version_file();
    let configuration = decide(&env, &context.config, || snapshot_version(&version_file))?;

    // stdout carries only the JSON document in json format
    for (name, value) in configuration.outputs() {
        match options.format {
            FormatOptions::Stdout => set_output_with(name, &value, &mut std::io::stdout()).await?,
            FormatOptions::Json => set_output_with(name, &value, &mut std::io::stderr()).await?,
        }
    }

    match options.format {
        FormatOptions::Stdout => announce(&env, &configuration),
        FormatOptions::Json => println!("{}", serde_json::to_string_pretty(&configuration)?),
    }
    Ok(())
}

fn snapshot_version(version_file: &Path) -> Result<String> {
    let version = JavaVersionParser::new(version_file)
        .parse()
        .context("Failed to extract the snapshot version")?;
    Ok(version.snapshot_version())
}

fn announce(env: &Environment, configuration: &WorkflowConfiguration) {
    if configuration.do_release {
        let message = format!(
            "do_release={}\npom_version={}",
            configuration.do_release,
            configuration.pom_version.as_deref().unwrap_or_default()
        );
        notice(&format!("This run will release '{}'", env.git_ref), &message);
    } else if configuration.do_snapshot_release {
        notice("This run will release a snapshot", "");
    } else {
        println!("This run will NOT make a release");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_snapshot_version_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Version_Snapshot.java");
        fs::write(&path, "return 1202305;\nfinal int beta = 1;\n").unwrap();

        assert_eq!(snapshot_version(&path).unwrap(), "1.2023.6beta1-SNAPSHOT");
    }

    #[test]
    fn test_snapshot_version_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = snapshot_version(&temp_dir.path().join("missing.java")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to extract the snapshot version");
    }
}
