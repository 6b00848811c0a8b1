use tracing::{error, info};

mod app;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod response;

use crate::app::App;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,inventory_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    info!("Inventory API starting");

    if let Err(e) = start().await {
        error!("Fatal: {:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn start() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let app = App::initialize(&config)?;
    app.run(&config.listen_addr()).await
}
