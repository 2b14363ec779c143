use carcalc_server::{Args, ServerConfig, build_router, init_logging};
use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config = ServerConfig::try_from(args)?;

    init_logging(&config.log_level)?;

    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        "carcalc API listening on {} (opportunity_rate={})",
        listener.local_addr()?,
        config.opportunity_rate
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
    }
}
