//! Jardim HTTP server
//!
//! Serves one of two API variants over a shared SQLite database: the
//! multi-entity garden API or the standalone plant encyclopedia.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use jardim_core::KeeperBuilder;
use jardim_server::{
    args::{Args, Commands},
    http,
};
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, bind, command } = Args::parse();

    let keeper = KeeperBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize keeper")?;
    let keeper = Arc::new(keeper);

    let router = match command {
        Some(Commands::Encyclopedia { cors_origins }) => {
            let seeded = keeper.ensure_entry_catalog().await?;
            if seeded > 0 {
                info!("Seeded {seeded} encyclopedia entries");
            }
            http::encyclopedia::router(Arc::clone(&keeper), &cors_origins)?
        }
        Some(Commands::Garden) | None => {
            let seeded = keeper.ensure_species_catalog().await?;
            if seeded > 0 {
                info!("Seeded {seeded} species");
            }
            http::garden::router(Arc::clone(&keeper))
        }
    };

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!("Jardim listening on {bind}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install shutdown handler: {err}");
    }
}
