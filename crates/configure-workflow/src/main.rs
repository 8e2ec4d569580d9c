use std::process;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let layer = fmt::layer().compact().with_writer(std::io::stderr);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(layer).with(filter).init();

    if let Err(e) =
        configure_workflow_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await
    {
        configure_workflow_utils::error(&format!("{e:#}"));
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
