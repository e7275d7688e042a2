use anyhow::Context;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

use marinesense::api::{self, AppState};
use marinesense::config;
use marinesense::{Dispatcher, HttpProber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = config::load_config().context("Failed to load configuration")?;

    let prober = Box::new(HttpProber::new().context("Failed to build HTTP client")?);
    let dispatcher = Arc::new(Dispatcher::new(prober));
    let state = AppState::new(dispatcher, config.targets);

    let addr: SocketAddr = config
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen))?;

    info!("Listening on http://{}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?,
        api::router(state),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown requested");
}
