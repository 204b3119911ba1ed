//! WQD CLI - Command line tool for capturing and querying water quality samples.

use clap::Parser;
use wqd_api::{BackendConfig, HttpBackend};

#[derive(Parser)]
#[command(name = "wqd-cli", version, about = "Water quality sample toolkit")]
struct Cli {
    /// Backend base URL (defaults to http://localhost:8000)
    #[arg(long, global = true, env = "WQD_BACKEND_URL")]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: wqd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = BackendConfig::from_env(cli.backend_url.as_deref())?;
    let backend = HttpBackend::new(config);
    wqd_cmd::run(&backend, cli.command).await
}
