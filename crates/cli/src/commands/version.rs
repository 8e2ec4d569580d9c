use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use configure_workflow_java::{JavaVersion, JavaVersionParser};

use crate::{
    context::CommandContext,
    options::{FormatOptions, GlobalOptions},
};

#[derive(Args, Debug)]
#[command(about = "Print the version held by a Java version source file")]
pub struct VersionArgs {
    /// Java source file (default: the configured version file)
    pub path: Option<PathBuf>,

    /// Print the Maven snapshot version
    #[arg(short, long)]
    pub snapshot: bool,
}

/// Render a version as printed by the `version` command
///
/// # Errors
/// Returns error if JSON serialization fails.
fn render_version(version: &JavaVersion, snapshot: bool, format: &FormatOptions) -> Result<String> {
    match format {
        FormatOptions::Stdout if snapshot => Ok(version.snapshot_version()),
        FormatOptions::Stdout => Ok(version.dotted.clone()),
        FormatOptions::Json => {
            let mut json = serde_json::to_value(version)?;
            json["snapshot"] = version.snapshot_version().into();
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

/// Print the extracted Java version
///
/// # Errors
/// Returns error if the file cannot be read or holds no version.
pub async fn handle_version(args: &VersionArgs, options: &GlobalOptions) -> Result<()> {
    let context = CommandContext::new(options.config.as_deref()).await?;
    let path = match &args.path {
        Some(path) => context.current_dir.join(path),
        None => context.version_file(),
    };
    let version = JavaVersionParser::new(&path)
        .parse()
        .with_context(|| format!("Failed to extract the version from {}", path.display()))?;

    println!("{}", render_version(&version, args.snapshot, &options.format)?);
    Ok(())
}
