//! Core library for the jardim plant care service.
//!
//! This crate provides the domain logic for tracking gardeners, plant
//! species, registered plants, and care events, including the SQLite
//! persistence layer, the async [`Keeper`] facade, and the next-watering
//! calculation. The companion `jardim-server` crate exposes these
//! operations over HTTP.
//!
//! # Quick Start
//!
//! ```rust
//! use jardim_core::{params::CreateGardener, KeeperBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a keeper instance backed by a SQLite file
//! let keeper = KeeperBuilder::new()
//!     .with_database_path(Some("garden.db"))
//!     .build()
//!     .await?;
//!
//! // Seed the fixed species catalog (idempotent)
//! keeper.ensure_species_catalog().await?;
//!
//! // Register a gardener
//! let gardener = keeper
//!     .create_gardener(&CreateGardener {
//!         name: "Ana".to_string(),
//!         email: "ana@example.com".to_string(),
//!     })
//!     .await?;
//! println!("Registered gardener {}", gardener.id);
//!
//! // List the species catalog
//! for species in keeper.list_species().await? {
//!     println!("{}: every {} days", species.popular_name, species.watering_interval_days);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod error;
pub mod keeper;
pub mod models;
pub mod params;
pub mod watering;

// Re-export commonly used types
pub use db::Database;
pub use error::{GardenError, Result};
pub use keeper::{Keeper, KeeperBuilder};
pub use models::{CareTask, Gardener, Plant, PlantEntry, Species};
pub use params::{
    CreateEntry, CreateGardener, CreateSpecies, Id, ListEntries, LogCareTask, RegisterPlant,
    UpdateEntry,
};
pub use watering::{WateringForecast, WATERING_TASK_TYPE};
