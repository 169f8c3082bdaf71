//! Care task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A logged care event for a registered plant.
///
/// The task type is a free-text tag; watering events use the
/// [`crate::watering::WATERING_TASK_TYPE`] tag and feed the next-watering
/// calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareTask {
    /// Unique identifier for the task
    pub id: u64,

    /// Kind of care performed, e.g. "Rega" or "Adubação"
    #[serde(rename = "tipo_tarefa")]
    pub task_type: String,

    /// When the care was performed (defaults to logging time, UTC)
    #[serde(rename = "data_execucao")]
    pub performed_at: Timestamp,

    /// ID of the plant this task belongs to
    #[serde(rename = "planta_id")]
    pub plant_id: u64,
}
