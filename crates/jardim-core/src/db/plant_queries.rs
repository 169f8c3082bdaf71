//! Registered plant queries.
//!
//! Every fetch that produces a [`Plant`] joins the species row explicitly;
//! callers never receive a plant without its species populated.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::{Plant, Species},
    params::RegisterPlant,
};

use super::utils::{id_column, timestamp_column};

const INSERT_PLANT_SQL: &str = "INSERT INTO plants (nickname, location, acquired_at, gardener_id, species_id) VALUES (?1, ?2, ?3, ?4, ?5)";
const CHECK_PLANT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plants WHERE id = ?1)";
const DELETE_PLANT_TASKS_SQL: &str = "DELETE FROM care_tasks WHERE plant_id = ?1";
const DELETE_PLANT_SQL: &str = "DELETE FROM plants WHERE id = ?1";

// Plants are always fetched together with their species
const SELECT_PLANT_WITH_SPECIES: &str = "SELECT p.id, p.nickname, p.location, p.acquired_at, p.species_id, \
     s.id, s.popular_name, s.scientific_name, s.care_instructions, s.watering_interval_days \
     FROM plants p JOIN species s ON s.id = p.species_id";

impl super::Database {
    /// Helper to construct a Plant (with species) from a joined row.
    fn build_plant_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plant> {
        let species = Species {
            id: id_column(row, 5)?,
            popular_name: row.get(6)?,
            scientific_name: row.get(7)?,
            care_instructions: row.get(8)?,
            watering_interval_days: row.get(9)?,
        };

        Ok(Plant {
            id: id_column(row, 0)?,
            nickname: row.get(1)?,
            location: row.get(2)?,
            acquired_at: timestamp_column(row, 3)?,
            species_id: id_column(row, 4)?,
            species,
            tasks: Vec::new(),
        })
    }

    /// Registers a new plant under the given gardener.
    ///
    /// Both referenced rows are verified inside the transaction so a
    /// missing gardener or species surfaces as a not-found error instead
    /// of a foreign key failure.
    pub fn register_plant(&mut self, gardener_id: u64, params: &RegisterPlant) -> Result<Plant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let gardener_exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM gardeners WHERE id = ?1)",
                params![gardener_id as i64],
                |row| row.get(0),
            )
            .map_err(|e| GardenError::database_error("Failed to check gardener existence", e))?;
        if !gardener_exists {
            return Err(GardenError::GardenerNotFound { id: gardener_id });
        }

        let species = tx
            .query_row(
                "SELECT id, popular_name, scientific_name, care_instructions, watering_interval_days FROM species WHERE id = ?1",
                params![params.species_id as i64],
                Self::build_species_from_row,
            )
            .optional()
            .map_err(|e| GardenError::database_error("Failed to query species", e))?
            .ok_or(GardenError::SpeciesNotFound {
                id: params.species_id,
            })?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_PLANT_SQL,
            params![
                params.nickname,
                params.location,
                now.to_string(),
                gardener_id as i64,
                params.species_id as i64
            ],
        )
        .map_err(|e| GardenError::database_error("Failed to insert plant", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plant {
            id,
            nickname: params.nickname.clone(),
            location: params.location.clone(),
            acquired_at: now,
            species_id: params.species_id,
            species,
            tasks: Vec::new(),
        })
    }

    /// Lists all plants of a gardener, species and care tasks populated.
    ///
    /// An unknown gardener id yields an empty list, not an error; the
    /// listing is a plain filter on ownership.
    pub fn list_plants(&self, gardener_id: u64) -> Result<Vec<Plant>> {
        let sql = format!("{SELECT_PLANT_WITH_SPECIES} WHERE p.gardener_id = ?1 ORDER BY p.id");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| GardenError::database_error("Failed to prepare query", e))?;

        let mut plants: Vec<Plant> = stmt
            .query_map(params![gardener_id as i64], Self::build_plant_from_row)
            .map_err(|e| GardenError::database_error("Failed to query plants", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| GardenError::database_error("Failed to fetch plants", e))?;

        for plant in &mut plants {
            plant.tasks = self.get_tasks(plant.id)?;
        }

        Ok(plants)
    }

    /// Retrieves a plant by ID, species and care tasks populated.
    pub fn get_plant(&self, id: u64) -> Result<Option<Plant>> {
        let sql = format!("{SELECT_PLANT_WITH_SPECIES} WHERE p.id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| GardenError::database_error("Failed to prepare query", e))?;

        let mut plant = stmt
            .query_row(params![id as i64], Self::build_plant_from_row)
            .optional()
            .map_err(|e| GardenError::database_error("Failed to query plant", e))?;

        if let Some(ref mut plant) = plant {
            plant.tasks = self.get_tasks(plant.id)?;
        }

        Ok(plant)
    }

    /// Permanently deletes a plant and all its care tasks.
    pub fn delete_plant(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLANT_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| GardenError::database_error("Failed to check plant existence", e))?;

        if !exists {
            return Err(GardenError::PlantNotFound { id });
        }

        // The ON DELETE CASCADE clause covers this, but the delete is kept
        // explicit so no orphan rows survive even with foreign keys off
        tx.execute(DELETE_PLANT_TASKS_SQL, params![id as i64])
            .map_err(|e| GardenError::database_error("Failed to delete plant care tasks", e))?;

        tx.execute(DELETE_PLANT_SQL, params![id as i64])
            .map_err(|e| GardenError::database_error("Failed to delete plant", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
