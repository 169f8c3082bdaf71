//! Data models for gardeners, species, plants, and care events.
//!
//! These are the domain records persisted by [`crate::db`] and returned by
//! the [`crate::keeper::Keeper`] facade. Struct fields use English names;
//! the JSON wire format keeps the original Portuguese field names through
//! `#[serde(rename)]` attributes, so the HTTP surface matches the published
//! API contract (`nome_popular`, `frequencia_rega_dias`, ...).
//!
//! Two families of records coexist:
//!
//! - The multi-entity garden model: [`Gardener`] owns [`Plant`]s, each plant
//!   references a [`Species`] and owns [`CareTask`]s. A [`Plant`] always
//!   carries its species fully populated; there is no lazy variant.
//! - The standalone encyclopedia model: [`PlantEntry`], a flat record with
//!   no relations.

pub mod entry;
pub mod gardener;
pub mod plant;
pub mod species;
pub mod task;

#[cfg(test)]
mod tests;

pub use entry::PlantEntry;
pub use gardener::Gardener;
pub use plant::Plant;
pub use species::Species;
pub use task::CareTask;
