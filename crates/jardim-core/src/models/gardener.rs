//! Gardener model definition.

use serde::{Deserialize, Serialize};

use super::Plant;

/// A registered gardener who owns zero or more plants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gardener {
    /// Unique identifier for the gardener
    pub id: u64,

    /// Display name of the gardener
    #[serde(rename = "nome")]
    pub name: String,

    /// Contact email, unique across all gardeners
    pub email: String,

    /// Plants registered by this gardener (empty unless explicitly loaded)
    #[serde(rename = "plantas", default)]
    pub plants: Vec<Plant>,
}
