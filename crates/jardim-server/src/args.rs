use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

/// Main command-line interface for the jardim plant care service
///
/// Jardim is a record-keeping service for plant care: it tracks gardeners,
/// plant species, registered plants, and care events, and suggests the next
/// watering date from the last logged watering. The binary serves one of
/// two HTTP API variants, selected by subcommand.
#[derive(Parser)]
#[command(version, about, name = "jardim")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/jardim/jardim.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Address to bind the HTTP server to
    #[arg(long, global = true, default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available deployment variants
///
/// The two variants are not meant to run together: `garden` serves the
/// multi-entity API (gardeners, species, plants, care tasks), while
/// `encyclopedia` serves the standalone flat plant catalog.
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the multi-entity garden API (default)
    #[command(alias = "g")]
    Garden,
    /// Serve the standalone plant encyclopedia API
    #[command(alias = "e")]
    Encyclopedia {
        /// Origin allowed for cross-origin requests; repeatable. Any
        /// origin is allowed when none is given
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },
}
