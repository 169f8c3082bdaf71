//! Registered plant model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{CareTask, Species};

/// An individually registered plant belonging to a gardener.
///
/// The species field is not optional: every fetch that produces a `Plant`
/// joins the species row, so callers never observe a partially loaded
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plant {
    /// Unique identifier for the plant
    pub id: u64,

    /// Nickname given by the gardener, e.g. "Jiboia da sala"
    #[serde(rename = "apelido")]
    pub nickname: String,

    /// Where the plant lives, e.g. "Sala de estar"
    #[serde(rename = "localizacao")]
    pub location: String,

    /// When the plant was acquired (defaults to registration time, UTC)
    #[serde(rename = "data_aquisicao")]
    pub acquired_at: Timestamp,

    /// ID of the referenced species
    #[serde(rename = "especie_id")]
    pub species_id: u64,

    /// The referenced species, always populated
    #[serde(rename = "especie")]
    pub species: Species,

    /// Care tasks logged for this plant
    #[serde(rename = "tarefas", default)]
    pub tasks: Vec<CareTask>,
}
