//! Species model definition.

use serde::{Deserialize, Serialize};

/// A plant species from the care catalog.
///
/// Both names are unique in the catalog. The watering interval drives the
/// next-watering calculation in [`crate::watering`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Species {
    /// Unique identifier for the species
    pub id: u64,

    /// Common name, e.g. "Jiboia"
    #[serde(rename = "nome_popular")]
    pub popular_name: String,

    /// Scientific name, e.g. "Epipremnum aureum"
    #[serde(rename = "nome_cientifico")]
    pub scientific_name: String,

    /// Free-text care instructions
    #[serde(rename = "instrucoes_de_cuidado")]
    pub care_instructions: String,

    /// Recommended days between waterings (always positive)
    #[serde(rename = "frequencia_rega_dias")]
    pub watering_interval_days: i32,
}
