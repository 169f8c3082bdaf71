//! Parameter structures for jardim operations.
//!
//! These structures carry validated request data between the interface
//! layer (HTTP handlers, tests) and the [`crate::keeper::Keeper`] facade.
//! They deserialize directly from the JSON request bodies, so fields keep
//! the Portuguese wire names via `#[serde(rename)]` while the Rust side
//! stays English. Required fields have no serde defaults: a missing field
//! is rejected by the extractor before any handler runs.

use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Self { id }
    }
}

/// Parameters for registering a new gardener.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGardener {
    /// Display name of the gardener
    #[serde(rename = "nome")]
    pub name: String,
    /// Contact email, must not already be registered
    pub email: String,
}

/// Parameters for adding a species to the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSpecies {
    /// Common name (unique)
    #[serde(rename = "nome_popular")]
    pub popular_name: String,
    /// Scientific name (unique)
    #[serde(rename = "nome_cientifico")]
    pub scientific_name: String,
    /// Free-text care instructions
    #[serde(rename = "instrucoes_de_cuidado")]
    pub care_instructions: String,
    /// Recommended days between waterings
    #[serde(rename = "frequencia_rega_dias")]
    pub watering_interval_days: i32,
}

impl CreateSpecies {
    /// Validates that the watering interval is a positive number of days.
    ///
    /// The schema carries a matching CHECK constraint, but validating here
    /// produces a field-level error instead of a bare constraint failure.
    pub fn validate(&self) -> Result<()> {
        if self.watering_interval_days < 1 {
            return Err(GardenError::invalid_input(
                "frequencia_rega_dias",
                format!(
                    "Watering interval must be at least 1 day, got {}",
                    self.watering_interval_days
                ),
            ));
        }
        Ok(())
    }
}

/// Parameters for registering a plant under a gardener.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterPlant {
    /// Nickname for the plant
    #[serde(rename = "apelido")]
    pub nickname: String,
    /// Where the plant lives
    #[serde(rename = "localizacao")]
    pub location: String,
    /// ID of an existing species
    #[serde(rename = "especie_id")]
    pub species_id: u64,
}

/// Parameters for logging a care task against a plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogCareTask {
    /// Kind of care performed, e.g. "Rega"
    #[serde(rename = "tipo_tarefa")]
    pub task_type: String,
}

/// Parameters for creating an encyclopedia entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEntry {
    /// Common name
    #[serde(rename = "nome_popular")]
    pub popular_name: String,
    /// Scientific name
    #[serde(rename = "nome_cientifico")]
    pub scientific_name: String,
    /// Botanical family
    #[serde(rename = "familia")]
    pub family: String,
    /// Geographic origin
    #[serde(rename = "origem")]
    pub origin: String,
    /// Free-text care notes
    #[serde(rename = "cuidados")]
    pub care_notes: String,
}

/// Parameters for partially updating an encyclopedia entry.
///
/// Every field is optional; absent fields leave the stored value
/// untouched. The merge is performed explicitly field by field in the
/// data-access layer, never by defaulting absent fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEntry {
    /// New common name, if changing
    #[serde(rename = "nome_popular")]
    pub popular_name: Option<String>,
    /// New scientific name, if changing
    #[serde(rename = "nome_cientifico")]
    pub scientific_name: Option<String>,
    /// New botanical family, if changing
    #[serde(rename = "familia")]
    pub family: Option<String>,
    /// New geographic origin, if changing
    #[serde(rename = "origem")]
    pub origin: Option<String>,
    /// New care notes, if changing
    #[serde(rename = "cuidados")]
    pub care_notes: Option<String>,
}

/// Parameters for listing encyclopedia entries with pagination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListEntries {
    /// Number of entries to skip from the start of the id order
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of entries to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

impl Default for ListEntries {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}
