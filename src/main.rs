mod args;

use anyhow::Context;
use clap::Parser;
use selector_scraper::web::HttpServer;
use selector_scraper::Config;
use tracing::{info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

use crate::args::Args;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let config = Config::from(Args::parse());
    let state = config.app_state().context("Failed to set up scraper")?;

    info!(
        "Loaded {} recommended sites, link resolution: {:?}, timeout: {:?}",
        state.catalog.sites().len(),
        config.scraper.link_resolution,
        config.scraper.timeout
    );
    info!("Press Ctrl+C to stop");

    HttpServer::new(config.listen_addr, state)
        .run(shutdown_signal())
        .await
}
