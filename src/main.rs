use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use receipt_processor::api::{AppState, create_router};
use receipt_processor::config::ConfigLoader;
use receipt_processor::error::ServiceResult;
use receipt_processor::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "receipt-processor",
    about = "Store receipts and score them for loyalty points",
    version
)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("receipt-processor error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> ServiceResult<()> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::defaults(),
    };
    let mut config = loader.with_env_overrides()?.into_config();

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let addr = config.server.socket_addr()?;
    let app = create_router(AppState::in_memory());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Receipt processor listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Receipt processor stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until the process is killed.
        std::future::pending::<()>().await;
    }
}
