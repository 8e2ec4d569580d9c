use std::path::PathBuf;

use clap::Args;

use crate::options::FormatOptions;

/// Options accepted before or after any subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    #[arg(long, global = true, default_value = "stdout")]
    pub format: FormatOptions,

    /// Configuration file (default: .github/configure-workflow.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}
