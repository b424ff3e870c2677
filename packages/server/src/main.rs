// ABOUTME: whisper-server binary entry point
// ABOUTME: Parses flags, loads configuration and the registry, then runs the server

use std::net::IpAddr;

use clap::Parser;
use tracing::info;

use whisper_models::ModelRegistry;
use whisper_server::{config::Config, logging, run_server};

#[derive(Parser)]
#[command(name = "whisper-server")]
#[command(about = "Serves the supported speech-transcription models over HTTP")]
#[command(version)]
struct Cli {
    /// Address to bind (overrides WHISPER_HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to bind (overrides WHISPER_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.host, cli.port)?;
    info!(config = ?config, "Starting whisper-server");

    let registry = ModelRegistry::builtin()?;
    run_server(config, registry).await
}
