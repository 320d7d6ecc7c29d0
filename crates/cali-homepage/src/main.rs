use std::sync::Arc;

use cali_homepage::{AppState, Cli, ServerConfig, build_router};
use cali_logging::CaliSubscriberBuilder;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::from_cli(&cli)?;

    let _log_guard = CaliSubscriberBuilder::new()
        .with_config(config.log.clone())
        .init();

    let dataset = config.load_dataset()?;
    let state = Arc::new(AppState::new(dataset, config.smaller_host_marker.as_str()));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
