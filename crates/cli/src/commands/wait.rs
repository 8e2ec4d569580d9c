use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use configure_workflow_utils::{debug, get_input, set_output};
use tracing::info;

#[derive(Args, Debug)]
#[command(about = "Wait for a number of milliseconds and set the `time` output")]
pub struct WaitArgs {
    /// Milliseconds to wait (default: the `milliseconds` action input)
    #[arg(short, long)]
    pub milliseconds: Option<u64>,
}

fn parse_milliseconds(input: &str) -> Result<u64> {
    input
        .parse::<u64>()
        .with_context(|| format!("milliseconds not a number: '{input}'"))
}

fn time_string() -> String {
    chrono::Local::now().format("%H:%M:%S GMT%z").to_string()
}

/// Wait, then set the `time` output
///
/// # Errors
/// Returns error if the milliseconds input is not a number or the output cannot be written.
pub async fn handle_wait(args: &WaitArgs) -> Result<()> {
    let milliseconds = match args.milliseconds {
        Some(milliseconds) => milliseconds,
        None => parse_milliseconds(&get_input("milliseconds"))?,
    };

    debug(&format!("Waiting {milliseconds} milliseconds ..."));
    debug(&time_string());
    tokio::time::sleep(Duration::from_millis(milliseconds)).await;
    let time = time_string();
    debug(&time);
    info!(milliseconds, "waited");

    set_output("time", &time).await
}
