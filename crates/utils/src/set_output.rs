use std::{io::Write, path::Path};

use anyhow::{Context, Result, bail};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

use crate::workflow_command::format_command;

/// Format a step output record for the `$GITHUB_OUTPUT` file.
///
/// Single-line values use `name=value`; multi-line values use the heredoc form
/// with a random delimiter.
///
/// # Errors
/// Returns error if the generated delimiter occurs in the name or value.
pub fn format_output(name: &str, value: &str) -> Result<String> {
    if !value.contains('\n') && !value.contains('\r') {
        return Ok(format!("{name}={value}\n"));
    }
    let delimiter = format!("ghadelimiter_{}", nanoid::nanoid!());
    if name.contains(&delimiter) || value.contains(&delimiter) {
        bail!("Unexpected input: output {name} contains the delimiter {delimiter}");
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Append a step output to the file at `path`.
///
/// # Errors
/// Returns error if the file cannot be opened or written.
pub async fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let record = format_output(name, value)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("Failed to open output file {}", path.display()))?;
    file.write_all(record.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

/// Set a step output for later steps of the workflow.
///
/// Writes to the file named by `GITHUB_OUTPUT`, or prints the legacy
/// `set-output` command when running outside a runner that provides it.
///
/// # Errors
/// Returns error if writing the output file fails.
pub async fn set_output(name: &str, value: &str) -> Result<()> {
    set_output_with(name, value, &mut std::io::stdout()).await
}

/// Like [`set_output`], but the legacy `set-output` command goes to `fallback`.
///
/// # Errors
/// Returns error if writing the output file or `fallback` fails.
pub async fn set_output_with<W: Write>(name: &str, value: &str, fallback: &mut W) -> Result<()> {
    debug!(name, value, "set output");
    match std::env::var_os("GITHUB_OUTPUT").filter(|path| !path.is_empty()) {
        Some(path) => append_output(Path::new(&path), name, value).await,
        None => {
            writeln!(fallback, "{}", format_command("set-output", &[("name", name)], value))?;
            Ok(())
        }
    }
}
