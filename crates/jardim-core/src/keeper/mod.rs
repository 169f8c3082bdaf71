//! High-level async facade for the plant care store.
//!
//! [`Keeper`] is the central coordinator between the interface layers
//! (HTTP handlers, tests) and the database. Each operation opens a scoped
//! [`crate::db::Database`] connection on a blocking thread via
//! `spawn_blocking`, does one unit of work, and releases the connection
//! unconditionally when the closure returns. There is no shared mutable
//! state beyond the SQLite file itself.
//!
//! ## Submodules
//!
//! - [`builder`]: factory resolving the database path (XDG by default)
//! - [`gardener_ops`], [`species_ops`], [`plant_ops`], [`entry_ops`]: one
//!   async method per data-access operation, plus the next-watering
//!   composition and the seeding entry points

use std::path::PathBuf;

use crate::error::GardenError;

pub mod builder;
pub mod entry_ops;
pub mod gardener_ops;
pub mod plant_ops;
pub mod species_ops;


pub use builder::KeeperBuilder;

/// Main facade for plant care operations.
pub struct Keeper {
    pub(crate) db_path: PathBuf,
}

impl Keeper {
    /// Creates a new keeper with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

/// Maps a blocking-task join failure into a domain error.
pub(crate) fn join_error(e: tokio::task::JoinError) -> GardenError {
    GardenError::Configuration {
        message: format!("Task join error: {e}"),
    }
}
