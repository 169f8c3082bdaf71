//! Encyclopedia entry model definition.

use serde::{Deserialize, Serialize};

/// A flat plant encyclopedia entry used by the standalone deployment
/// variant. Unlike [`super::Species`], entries have no relations and
/// support full update and delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantEntry {
    /// Unique identifier for the entry
    pub id: u64,

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
