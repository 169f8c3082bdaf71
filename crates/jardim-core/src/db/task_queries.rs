//! Care task queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::CareTask,
    watering::WATERING_TASK_TYPE,
};

use super::utils::{id_column, timestamp_column};

const INSERT_TASK_SQL: &str =
    "INSERT INTO care_tasks (task_type, performed_at, plant_id) VALUES (?1, ?2, ?3)";
const SELECT_TASKS_BY_PLANT_SQL: &str =
    "SELECT id, task_type, performed_at, plant_id FROM care_tasks WHERE plant_id = ?1 ORDER BY id";
// The id tie-break keeps same-second waterings in insertion order; the
// text timestamps alone do not sort stably within one second
const SELECT_LAST_WATERING_SQL: &str = "SELECT id, task_type, performed_at, plant_id FROM care_tasks \
     WHERE plant_id = ?1 AND task_type = ?2 ORDER BY performed_at DESC, id DESC LIMIT 1";

impl super::Database {
    /// Helper to construct a CareTask from a database row.
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<CareTask> {
        Ok(CareTask {
            id: id_column(row, 0)?,
            task_type: row.get(1)?,
            performed_at: timestamp_column(row, 2)?,
            plant_id: id_column(row, 3)?,
        })
    }

    /// Logs a care task for the given plant, stamped with the current time.
    pub fn log_care_task(&mut self, plant_id: u64, task_type: &str) -> Result<CareTask> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plant_exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM plants WHERE id = ?1)",
                params![plant_id as i64],
                |row| row.get(0),
            )
            .map_err(|e| GardenError::database_error("Failed to check plant existence", e))?;

        if !plant_exists {
            return Err(GardenError::PlantNotFound { id: plant_id });
        }

        let now = Timestamp::now();

        tx.execute(
            INSERT_TASK_SQL,
            params![task_type, now.to_string(), plant_id as i64],
        )
        .map_err(|e| GardenError::database_error("Failed to insert care task", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(CareTask {
            id,
            task_type: task_type.into(),
            performed_at: now,
            plant_id,
        })
    }

    /// Lists all care tasks of a plant in logging order.
    pub fn get_tasks(&self, plant_id: u64) -> Result<Vec<CareTask>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_BY_PLANT_SQL)
            .map_err(|e| GardenError::database_error("Failed to prepare query", e))?;

        let tasks: Vec<CareTask> = stmt
            .query_map(params![plant_id as i64], Self::build_task_from_row)
            .map_err(|e| GardenError::database_error("Failed to query care tasks", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| GardenError::database_error("Failed to fetch care tasks", e))?;

        Ok(tasks)
    }

    /// Returns the most recent watering task for a plant, if any.
    pub fn last_watering(&self, plant_id: u64) -> Result<Option<CareTask>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LAST_WATERING_SQL)
            .map_err(|e| GardenError::database_error("Failed to prepare query", e))?;

        stmt.query_row(
            params![plant_id as i64, WATERING_TASK_TYPE],
            Self::build_task_from_row,
        )
        .optional()
        .map_err(|e| GardenError::database_error("Failed to query last watering", e))
    }
}
