use anyhow::Result;
use clap::Args;

use crate::{context::CommandContext, options::GlobalOptions};

#[derive(Args, Debug)]
#[command(about = "Show the effective configure-workflow configuration")]
pub struct ConfigArgs {}

/// Display configure-workflow configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(_args: &ConfigArgs, options: &GlobalOptions) -> Result<()> {
    let context = CommandContext::new(options.config.as_deref()).await?;
    println!("{}", serde_json::to_string_pretty(&context.config)?);
    Ok(())
}
