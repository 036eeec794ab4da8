//! # homepaneld: control panel daemon
//!
//! Composition root that checks the fixtures and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging
//! - Check the configured home's fixture documents
//! - Build the axum router over the fixture and asset directories
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the wiring layer. No panel logic belongs here. The panel itself
//! runs in the browser (`homepanel-adapter-web`).

mod config;
mod fixtures;

use homepanel_adapter_http_axum::router::{self, StaticDirs};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Fixtures
    let summary = fixtures::check_home(&config.assets.fixtures_dir, &config.panel.home)?;
    tracing::info!(
        home = %config.panel.home,
        home_features = summary.home_features,
        rooms = summary.rooms,
        room_features = summary.room_features,
        skipped = summary.skipped.len(),
        "fixtures checked"
    );

    // HTTP
    let app = router::build(&StaticDirs {
        fixtures: config.assets.fixtures_dir.clone(),
        assets: config.assets.static_dir.clone(),
    });

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "homepaneld listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("homepaneld stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
