use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    commands::{
        ConfigArgs, ConfigureArgs, VersionArgs, WaitArgs, handle_config, handle_configure,
        handle_version, handle_wait,
    },
    options::GlobalOptions,
};
pub mod commands;
mod context;
pub mod options;

#[derive(Parser, Debug)]
#[command(
    name = "configure-workflow",
    author,
    version,
    about = "Decide whether a CI run releases a tag or publishes a snapshot",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: GlobalOptions,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Configure(ConfigureArgs),
    Version(VersionArgs),
    Wait(WaitArgs),
    Config(ConfigArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Configure(args) => handle_configure(&args, &cli.options).await?,
            Commands::Version(args) => handle_version(&args, &cli.options).await?,
            Commands::Wait(args) => handle_wait(&args).await?,
            Commands::Config(args) => handle_config(&args, &cli.options).await?,
        }
    } else {
        handle_configure(&ConfigureArgs {}, &cli.options).await?;
    }
    Ok(())
}
